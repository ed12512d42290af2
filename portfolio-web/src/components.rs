pub mod about;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod header;
pub mod hero;
pub mod language_selector;
pub mod loading_screen;
pub mod projects;

/// Page anchors and the `nav.*` key labelling each, in page order.
pub const NAV_SECTIONS: [(&str, &str); 5] = [
    ("hero", "nav.home"),
    ("about", "nav.about"),
    ("projects", "nav.projects"),
    ("experience", "nav.experience"),
    ("contact", "nav.contact"),
];
