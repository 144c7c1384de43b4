// Copyright 2025 the Mollyguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host element bridge to JSON.
//!
//! Mirror the element description of a confirm control into a small JSON
//! document after each activation, the way a serializing host embedding
//! might.
//!
//! Run:
//! - `cargo run -p mollyguard_demos --example confirm_host`

use mollyguard_control::{AttrSet, ConfirmConfigBuilder, ConfirmControl, ElementKind, ElementSpec};
use mollyguard_style::InlineStyle;
use serde::Serialize;

#[derive(Serialize)]
struct ElementDoc {
    tag: &'static str,
    class: String,
    text: String,
    disabled: bool,
    style: Vec<(String, String)>,
    attributes: Vec<(String, String)>,
}

impl ElementDoc {
    fn from_spec(spec: &ElementSpec<'_>) -> Self {
        Self {
            tag: match spec.kind {
                ElementKind::Button => "button",
                ElementKind::Link => "a",
            },
            class: spec.class_name.clone(),
            text: spec.text(),
            disabled: spec.disabled,
            style: spec
                .style
                .iter()
                .map(|(property, value)| (property.into(), value.into()))
                .collect(),
            attributes: spec
                .attributes
                .iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

fn main() {
    let config = ConfirmConfigBuilder::new()
        .active_label("Delete account")
        .active_style(InlineStyle::new().set("font-weight", "600"))
        .render_as_link(true)
        .attributes(
            AttrSet::new()
                .with("role", "button")
                .with("data-testid", "delete-account"),
        )
        .disable_after_confirmed(true)
        .build()
        .expect("configuration is well-formed");
    let mut control = ConfirmControl::new(config);

    loop {
        let doc = ElementDoc::from_spec(&control.element());
        let json = serde_json::to_string_pretty(&doc).expect("document serializes");
        println!("{json}");
        if control.handle_activation().is_none() {
            break;
        }
    }
}
