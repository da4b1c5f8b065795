use dioxus::prelude::*;

/// Bordered surface that groups one block of page content.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

// The card sections differ only in class name and tag.
macro_rules! card_section {
    ($(#[$doc:meta])* $name:ident, $tag:ident, $class:literal) => {
        $(#[$doc])*
        #[component]
        pub fn $name(
            #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
            children: Element,
        ) -> Element {
            let base = vec![Attribute::new("class", $class, None, false)];
            let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

            rsx! {
                $tag {
                    ..merged,
                    {children}
                }
            }
        }
    };
}

card_section!(CardHeader, div, "card-header");
card_section!(CardTitle, h3, "card-title");
card_section!(CardDescription, p, "card-description");
card_section!(
    /// Right-aligned slot in the header for a link or button.
    CardAction,
    div,
    "card-action"
);
card_section!(CardContent, div, "card-content");
card_section!(CardFooter, div, "card-footer");
