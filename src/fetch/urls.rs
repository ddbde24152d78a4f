// src/fetch/urls.rs

use url::Url;

/// Schedule page for `year`, or the undated current-season page when `None`.
pub fn schedule_url(base: &Url, year: Option<i32>) -> Url {
    let mut url = base.clone();
    if let Some(year) = year {
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&year.to_string());
        }
    }
    url
}
