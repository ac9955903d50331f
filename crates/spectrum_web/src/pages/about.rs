use minijinja::context;
use serde::Serialize;
use spectrum_core::Result;

use super::Page;
use crate::templates::Templates;

#[derive(Serialize)]
struct Feature {
    name: &'static str,
    blurb: &'static str,
}

#[derive(Serialize)]
struct TeamMember {
    name: &'static str,
    profile: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        name: "Variety of Sources",
        blurb: "Read from over 100 different sources and digest different perspectives.",
    },
    Feature {
        name: "Analytics",
        blurb: "Create an account and discover a personalized dashboard visualizing your reading habits.",
    },
    Feature {
        name: "Categories",
        blurb: "Widen your variety of news intake and draw from a range of categories.",
    },
];

const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Kevin Huynh",
        profile: "https://www.linkedin.com/in/kevinhuynh23/",
    },
    TeamMember {
        name: "Andrew Hwang",
        profile: "https://www.linkedin.com/in/andrewhwang10/",
    },
];

pub struct AboutPage;

impl Page for AboutPage {
    fn title(&self) -> String {
        "About".to_string()
    }

    fn render_content(&self, templates: &Templates) -> Result<String> {
        templates.render("about.html", context! { features => FEATURES, team => TEAM })
    }
}
