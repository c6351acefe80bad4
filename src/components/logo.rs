use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or("logo-img")]
    pub class: &'static str,
    #[prop_or("/assets/logo.png")]
    pub src: &'static str,
    #[prop_or("SkillMentorX logo")]
    pub alt: &'static str,
}

/// Site logo. If the image fails to load it is swapped for an icon
/// placeholder that fills the same box.
#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    let failed = use_state_eq(|| false);

    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| {
            failed.set(true);
        })
    };

    if *failed {
        html! {
            <div class={classes!("logo-fallback", props.class)}>
                <i class="fas fa-users"></i>
                <style>
                    {r#"
                    .logo-fallback {
                        width: 100%;
                        height: 100%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: var(--color-primary);
                        color: white;
                        border-radius: inherit;
                        font-size: inherit;
                    }
                    "#}
                </style>
            </div>
        }
    } else {
        html! {
            <img class={props.class} src={props.src} alt={props.alt} {onerror} />
        }
    }
}
