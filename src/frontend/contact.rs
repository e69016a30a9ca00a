use super::dom::create_ripple;
use super::driver::Driver;
use super::widgets::{Animated, Reveal, Section, TypewriterTitle};
use crate::contact::{ContactField, ContactForm};
use crate::content::{contact_service_options, CONTACT_INTRO};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;

fn field_change(event: &Event) -> Option<(ContactField, String)> {
    let target = event.target()?;
    let (name, value) = if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        (input.name(), input.value())
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        (select.name(), select.value())
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        (area.name(), area.value())
    } else {
        return None;
    };

    ContactField::from_name(&name).map(|field| (field, value))
}

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    /// Service or reason title picked elsewhere on the page.
    #[prop_or_default]
    pub inquiry: AttrValue,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let rerender = use_force_update();
    let form = use_memo((), move |_| {
        Driver::new(
            ContactForm::default(),
            Callback::from(move |_| rerender.force_update()),
        )
    });

    {
        let form = form.clone();
        use_effect_with((), move |_| move || form.stop(|_| {}));
    }

    {
        let form = form.clone();
        use_effect_with(props.inquiry.clone(), move |inquiry| {
            if !inquiry.is_empty() {
                form.update(|state, _| state.apply_inquiry(inquiry));
            }
            || ()
        });
    }

    let on_edit = {
        let form = form.clone();
        move |event: &Event| {
            if let Some((field, value)) = field_change(event) {
                form.update(|state, _| state.set_field(field, value));
            }
        }
    };
    let oninput = {
        let on_edit = on_edit.clone();
        Callback::from(move |event: InputEvent| on_edit(&event))
    };
    let onchange = Callback::from(move |event: Event| on_edit(&event));

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if let Err(error) = form.update(|state, now| state.submit(now)) {
                log::warn!("contact form not sent: {error}");
            }
        })
    };

    let state = form.state();
    let fields = state.fields();

    html! {
        <Section id="contact" class="bg-black">
            <div class="text-center mb-12">
                <TypewriterTitle text="Start Your Project" class="text-4xl md:text-5xl font-playfair font-bold text-gold" />
                <p class="max-w-2xl mx-auto text-gray-400 mt-4">{CONTACT_INTRO}</p>
            </div>
            <div class="max-w-3xl mx-auto">
                <Animated animation={Reveal::SettleIn}>
                    <form onsubmit={onsubmit} class="space-y-6">
                        <div class="grid md:grid-cols-2 gap-6">
                            <input type="text" name="name" placeholder="Your Name" value={fields.name.clone()} oninput={oninput.clone()} required={true} class="form-input" />
                            <input type="email" name="email" placeholder="Your Email" value={fields.email.clone()} oninput={oninput.clone()} required={true} class="form-input" />
                        </div>
                        <div>
                            <select name="service" onchange={onchange} required={true} class="form-input form-select">
                                { for contact_service_options().into_iter().map(|option| {
                                    let selected = option == fields.service;
                                    html! { <option key={option.clone()} value={option.clone()} selected={selected}>{option}</option> }
                                }) }
                            </select>
                        </div>
                        <div>
                            <textarea name="message" placeholder="Tell us about your project..." value={fields.message.clone()} oninput={oninput} required={true} rows="5" class="form-input"></textarea>
                        </div>
                        <div class="text-center">
                            <button type="submit" onclick={Callback::from(|event: MouseEvent| create_ripple(&event))} disabled={state.is_submitting()} class="btn-primary ripple-btn font-bold py-3 px-12 rounded-full text-lg focus-visible-ring">
                                {"Send Message"}
                            </button>
                        </div>
                    </form>
                    { for state.status().map(|status| html! { <p class="mt-6 text-center text-gold">{status.to_string()}</p> }) }
                </Animated>
            </div>
        </Section>
    }
}
