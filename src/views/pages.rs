// ============================================================================
// PUBLIC PAGES - Landing, about, contact
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::router::Route;

/// Landing page. Also where the guard sends unauthenticated visitors.
pub fn render_home() -> Result<Element, JsValue> {
    let markup = format!(
        "<section class=\"hero\">\
           <h1>Your health, one appointment away</h1>\
           <p>Book visits with trusted doctors, manage your medical profile and \
              keep every appointment in one place.</p>\
           <a class=\"btn-primary\" href=\"#{}\">Get Started</a>\
         </section>\
         <section class=\"features\">\
           <div class=\"feature-card\"><h3>Find Doctors</h3>\
             <p>Browse specialists and pick the right one for you.</p></div>\
           <div class=\"feature-card\"><h3>Book Online</h3>\
             <p>Choose a date and time that fits your schedule.</p></div>\
           <div class=\"feature-card\"><h3>Share Feedback</h3>\
             <p>Rate your visits and help others choose well.</p></div>\
         </section>",
        Route::Login.path()
    );
    Ok(ElementBuilder::new("main")?
        .class("page home-page")
        .html(&markup)
        .build())
}

pub fn render_about() -> Result<Element, JsValue> {
    let markup = "<section class=\"page-body\">\
           <h1>About Us</h1>\
           <p>MediBook connects patients with doctors for fast, transparent \
              appointment booking. Doctors manage their schedule and profile; \
              patients book, track and review their visits.</p>\
         </section>";
    Ok(ElementBuilder::new("main")?
        .class("page about-page")
        .html(markup)
        .build())
}

pub fn render_contact() -> Result<Element, JsValue> {
    let markup = "<section class=\"page-body\">\
           <h1>Contact</h1>\
           <p>Questions or trouble with your account? Write to \
              <a href=\"mailto:support@medibook.example\">support@medibook.example</a>.</p>\
         </section>";
    Ok(ElementBuilder::new("main")?
        .class("page contact-page")
        .html(markup)
        .build())
}
