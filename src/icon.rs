use gpui::SharedString;
use gpui_component::IconNamed;

/// Every icon shipped with this crate.
///
/// The set is closed: a name that is not a variant here does not exist, so
/// a misspelled icon is a compile error rather than a blank glyph at
/// runtime. Pass a variant to [`gpui_component::Icon::new`] to render it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VellumIcon {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUpRight,
    ArrowSwap,
    ChevronUp,
    ChevronDown,
    ChevronLeft,
    ChevronRight,
    Add,
    Subtract,
    Checkmark,
    Dismiss,
    Copy,
    Pencil,
    Trash,
    Download,
    Upload,
    Refresh,
    Link,
    ExternalLink,
    Search,
    Settings,
    Menu,
    Filter,
    Home,
    PanelLeft,
    PanelRight,
    Grid,
    ListBullet,
    Bell,
    Warning,
    Info,
    Eye,
    EyeOff,
    Lock,
    Star,
    Heart,
    Folder,
    File,
    Calendar,
    Clock,
    User,
    Sun,
    Moon,
    Logomark,
    GithubLogo,
}

impl VellumIcon {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 48] = [
        Self::ArrowUp,
        Self::ArrowDown,
        Self::ArrowLeft,
        Self::ArrowRight,
        Self::ArrowUpRight,
        Self::ArrowSwap,
        Self::ChevronUp,
        Self::ChevronDown,
        Self::ChevronLeft,
        Self::ChevronRight,
        Self::Add,
        Self::Subtract,
        Self::Checkmark,
        Self::Dismiss,
        Self::Copy,
        Self::Pencil,
        Self::Trash,
        Self::Download,
        Self::Upload,
        Self::Refresh,
        Self::Link,
        Self::ExternalLink,
        Self::Search,
        Self::Settings,
        Self::Menu,
        Self::Filter,
        Self::Home,
        Self::PanelLeft,
        Self::PanelRight,
        Self::Grid,
        Self::ListBullet,
        Self::Bell,
        Self::Warning,
        Self::Info,
        Self::Eye,
        Self::EyeOff,
        Self::Lock,
        Self::Star,
        Self::Heart,
        Self::Folder,
        Self::File,
        Self::Calendar,
        Self::Clock,
        Self::User,
        Self::Sun,
        Self::Moon,
        Self::Logomark,
        Self::GithubLogo,
    ];
}

impl IconNamed for VellumIcon {
    fn path(self) -> SharedString {
        match self {
            Self::ArrowUp => "icons/vellum/arrow_up.svg",
            Self::ArrowDown => "icons/vellum/arrow_down.svg",
            Self::ArrowLeft => "icons/vellum/arrow_left.svg",
            Self::ArrowRight => "icons/vellum/arrow_right.svg",
            Self::ArrowUpRight => "icons/vellum/arrow_up_right.svg",
            Self::ArrowSwap => "icons/vellum/arrow_swap.svg",
            Self::ChevronUp => "icons/vellum/chevron_up.svg",
            Self::ChevronDown => "icons/vellum/chevron_down.svg",
            Self::ChevronLeft => "icons/vellum/chevron_left.svg",
            Self::ChevronRight => "icons/vellum/chevron_right.svg",
            Self::Add => "icons/vellum/add.svg",
            Self::Subtract => "icons/vellum/subtract.svg",
            Self::Checkmark => "icons/vellum/checkmark.svg",
            Self::Dismiss => "icons/vellum/dismiss.svg",
            Self::Copy => "icons/vellum/copy.svg",
            Self::Pencil => "icons/vellum/pencil.svg",
            Self::Trash => "icons/vellum/trash.svg",
            Self::Download => "icons/vellum/download.svg",
            Self::Upload => "icons/vellum/upload.svg",
            Self::Refresh => "icons/vellum/refresh.svg",
            Self::Link => "icons/vellum/link.svg",
            Self::ExternalLink => "icons/vellum/external_link.svg",
            Self::Search => "icons/vellum/search.svg",
            Self::Settings => "icons/vellum/settings.svg",
            Self::Menu => "icons/vellum/menu.svg",
            Self::Filter => "icons/vellum/filter.svg",
            Self::Home => "icons/vellum/home.svg",
            Self::PanelLeft => "icons/vellum/panel_left.svg",
            Self::PanelRight => "icons/vellum/panel_right.svg",
            Self::Grid => "icons/vellum/grid.svg",
            Self::ListBullet => "icons/vellum/list_bullet.svg",
            Self::Bell => "icons/vellum/bell.svg",
            Self::Warning => "icons/vellum/warning.svg",
            Self::Info => "icons/vellum/info.svg",
            Self::Eye => "icons/vellum/eye.svg",
            Self::EyeOff => "icons/vellum/eye_off.svg",
            Self::Lock => "icons/vellum/lock.svg",
            Self::Star => "icons/vellum/star.svg",
            Self::Heart => "icons/vellum/heart.svg",
            Self::Folder => "icons/vellum/folder.svg",
            Self::File => "icons/vellum/file.svg",
            Self::Calendar => "icons/vellum/calendar.svg",
            Self::Clock => "icons/vellum/clock.svg",
            Self::User => "icons/vellum/user.svg",
            Self::Sun => "icons/vellum/sun.svg",
            Self::Moon => "icons/vellum/moon.svg",
            Self::Logomark => "icons/vellum/logomark.svg",
            Self::GithubLogo => "icons/vellum/github_logo.svg",
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{AssetSource, TestAppContext};
    use std::collections::HashSet;

    #[test]
    fn all_icon_paths_use_vellum_namespace() {
        for icon in VellumIcon::ALL {
            let path = icon.path();
            assert!(
                path.as_ref().starts_with("icons/vellum/"),
                "unexpected icon path: {}",
                path
            );
        }
    }

    #[test]
    fn all_icon_paths_resolve_in_assets() {
        let assets = crate::VellumAssets;
        for icon in VellumIcon::ALL {
            let path = icon.path();
            let found = assets.load(path.as_ref()).expect("load icon");
            assert!(found.is_some(), "missing embedded icon: {}", path);
        }
    }

    #[test]
    fn icon_paths_are_one_to_one() {
        let paths: HashSet<_> = VellumIcon::ALL.iter().map(|icon| icon.path()).collect();
        assert_eq!(paths.len(), VellumIcon::ALL.len());
    }

    #[gpui::test]
    fn icon_element_builds_in_test_app(cx: &mut TestAppContext) {
        cx.skip_drawing();

        {
            let mut app = cx.app.borrow_mut();
            gpui_component::init(&mut app);
        }

        let _ = gpui_component::Icon::new(VellumIcon::Logomark);
    }
}
