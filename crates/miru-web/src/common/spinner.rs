use dominator::{Dom, html};

pub struct Spinner {}

impl Spinner {
    pub fn render(fullscreen: bool) -> Dom {
        if fullscreen {
            html!("div", {
                .class(["spinner", "fullscreen"])
                .children(&mut [
                    html!("div", {
                        .class("loader")
                    })
                ])
            })
        } else {
            html!("div", {
                .class(["spinner"])
                .children(&mut [
                    html!("div", {
                        .class("loader")
                    })
                ])
            })
        }
    }
}
