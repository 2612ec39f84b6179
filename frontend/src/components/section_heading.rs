use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    /// Dark text for sections on a light background.
    #[prop_or_default]
    pub light: bool,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    let title_class = if props.light {
        "mb-2 font-serif text-3xl font-bold text-black md:text-4xl"
    } else {
        "mb-2 font-serif text-3xl font-bold text-white md:text-4xl"
    };
    let subtitle_class = if props.light {
        "mx-auto mt-4 max-w-2xl text-gray-600"
    } else {
        "mx-auto mt-4 max-w-2xl text-gray-300"
    };

    html! {
        <div class="mb-12 text-center">
            <h2 class={title_class}>{ props.title.clone() }</h2>
            <div class="mx-auto h-1 w-20 bg-[#D4AF37]"></div>
            if let Some(subtitle) = &props.subtitle {
                <p class={subtitle_class}>{ subtitle.clone() }</p>
            }
        </div>
    }
}
