use anyhow::anyhow;
use gpui::{AssetSource, Result, SharedString};
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::BTreeSet;
use tracing::{debug, warn};

#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

/// Asset source serving the vellum icon set, with the stock
/// `gpui-component` assets as a fallback so framework widgets keep their
/// built-in glyphs. Install once at startup via
/// `Application::with_assets(VellumAssets)`.
pub struct VellumAssets;

impl AssetSource for VellumAssets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }

        if let Some(file) = EmbeddedAssets::get(path) {
            return Ok(Some(file.data));
        }

        let fallback = gpui_component_assets::Assets.load(path)?;
        match &fallback {
            Some(_) => debug!(path, "asset served from bundled fallback set"),
            None => warn!(path, "asset missing from local and fallback sets"),
        }
        Ok(fallback)
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut entries = BTreeSet::<String>::new();
        for local in EmbeddedAssets::iter().filter(|entry| entry.starts_with(path)) {
            entries.insert(local.to_string());
        }
        for fallback in gpui_component_assets::Assets.list(path)? {
            entries.insert(fallback.to_string());
        }
        if entries.is_empty() && !path.is_empty() {
            return Err(anyhow!("could not find assets under path \"{path}\""));
        }
        Ok(entries.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_vellum_icons_are_resolvable() {
        let assets = VellumAssets;
        let data = assets
            .load("icons/vellum/search.svg")
            .expect("asset load");
        assert!(data.is_some());
    }

    #[test]
    fn fallback_gives_gpui_component_icons() {
        let assets = VellumAssets;
        let data = assets.load("icons/close.svg").expect("asset load");
        assert!(data.is_some());
    }

    #[test]
    fn empty_path_is_not_an_asset() {
        let assets = VellumAssets;
        let data = assets.load("").expect("asset load");
        assert!(data.is_none());
    }

    #[test]
    fn list_includes_every_local_icon() {
        let assets = VellumAssets;
        let entries = assets.list("icons/vellum/").expect("asset list");
        assert_eq!(entries.len(), crate::VellumIcon::ALL.len());
    }
}
