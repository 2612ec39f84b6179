use once_cell::sync::Lazy;
use shared::catalog::Catalog;
use web_sys::window;

/// Catalog parsed once from the JSON compiled into the binary. `None` when it
/// fails to load; sections that depend on it then render nothing.
pub static CATALOG: Lazy<Option<Catalog>> = Lazy::new(|| match Catalog::embedded() {
    Ok(catalog) => {
        log::info!("catalog loaded: {} menu items", catalog.menu().len());
        Some(catalog)
    }
    Err(err) => {
        log::error!("failed to load catalog: {}", err);
        None
    }
});

pub fn catalog() -> Option<&'static Catalog> {
    CATALOG.as_ref()
}

pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";

fn asset_base_url() -> String {
    window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

pub fn get_asset_url(path: &str) -> String {
    if path.is_empty() {
        format!("{}{}", asset_base_url(), PLACEHOLDER_IMAGE)
    } else if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}{}", asset_base_url(), path)
    }
}

/// Milliseconds on the same clock as requestAnimationFrame timestamps.
pub fn now_ms() -> Option<f64> {
    window().and_then(|w| w.performance()).map(|p| p.now())
}

pub fn scroll_to_section(id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::warn!("no section with id {}", id);
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
