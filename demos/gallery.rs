//! Renders every icon in the set with its name. Run with
//! `cargo run --example gallery`.

use gpui::{
    div, px, size, App, AppContext, Application, Bounds, Context, IntoElement, ParentElement,
    Render, Styled, Window, WindowBounds, WindowOptions,
};
use gpui_component::{ActiveTheme as _, Icon, Root, Sizable as _, Size};
use vellum_icons::{VellumAssets, VellumIcon};

struct IconGallery;

impl Render for IconGallery {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let background = theme.background;
        let foreground = theme.foreground;
        let muted = theme.muted_foreground;
        let border = theme.border;

        div()
            .size_full()
            .flex()
            .flex_wrap()
            .items_start()
            .gap_2()
            .p_4()
            .bg(background)
            .text_color(foreground)
            .children(VellumIcon::ALL.into_iter().map(|icon| {
                div()
                    .w(px(104.0))
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_1()
                    .p_2()
                    .border_1()
                    .border_color(border)
                    .rounded_md()
                    .child(Icon::new(icon).with_size(Size::Size(px(24.0))))
                    .child(
                        div()
                            .text_xs()
                            .text_color(muted)
                            .child(format!("{:?}", icon)),
                    )
            }))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    Application::new()
        .with_assets(VellumAssets)
        .run(|cx: &mut App| {
            gpui_component::init(cx);

            let bounds = Bounds::centered(None, size(px(880.0), px(640.0)), cx);

            cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    ..Default::default()
                },
                |window, cx| {
                    let gallery = cx.new(|_| IconGallery);
                    cx.new(|cx| Root::new(gallery, window, cx))
                },
            )
            .expect("open window");

            cx.activate(true);
        });
}
