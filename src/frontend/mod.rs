mod contact;
mod dom;
mod driver;
mod fallback;
mod hooks;
mod icons;
mod player;
mod portfolio;
mod sections;
mod widgets;

use crate::catalog::Catalog;
use contact::ContactSection;
use portfolio::PortfolioSection;
use sections::{
    AboutSection, CreativeProcessSection, Footer, Header, HeroSection, ServicesSection,
    WhyChooseUsSection,
};
use std::rc::Rc;
use yew::prelude::*;

const MOUNT_ID: &str = "app";
const CONTACT_SECTION_ID: &str = "contact";

fn load_catalog() -> Rc<Catalog> {
    match Catalog::bundled() {
        Ok(catalog) => {
            log::info!("portfolio catalog loaded ({} items)", catalog.len());
            Rc::new(catalog)
        }
        Err(error) => {
            log::error!("portfolio catalog rejected: {error}");
            Rc::new(Catalog::default())
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let catalog = use_memo((), |_| load_catalog());
    let inquiry = use_state(AttrValue::default);

    let on_inquiry = {
        let inquiry = inquiry.clone();
        Callback::from(move |title: AttrValue| {
            inquiry.set(title);
            dom::smooth_scroll_to(CONTACT_SECTION_ID);
        })
    };

    html! {
        <>
            <Header />
            <main>
                <HeroSection />
                <AboutSection />
                <ServicesSection on_inquiry={on_inquiry.clone()} />
                <WhyChooseUsSection on_inquiry={on_inquiry} />
                <CreativeProcessSection />
                <PortfolioSection catalog={(*catalog).clone()} />
                <ContactSection inquiry={(*inquiry).clone()} />
            </main>
            <Footer />
        </>
    }
}

pub fn run() {
    fallback::install(MOUNT_ID);

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(error) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already installed: {error}").into());
    }

    let Some(root) = dom::document().and_then(|d| d.get_element_by_id(MOUNT_ID)) else {
        log::error!("missing #{MOUNT_ID} mount point");
        return;
    };

    yew::Renderer::<App>::with_root(root).render();
}
