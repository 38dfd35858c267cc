use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use js_sys::Date;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use web_sys::FileList;
use yew::prelude::*;

pub fn generate_id() -> u64 {
    static ID_COUNTER: AtomicU64 = AtomicU64::new(0);
    let now = Date::now() as u64;
    let count = ID_COUNTER.fetch_add(1, Ordering::SeqCst);
    now * 1000 + (count % 1000)
}

// Debounce function to limit button events
pub fn debounce<F>(duration: u32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));

    Callback::from(move |_| {
        let mut timeout_ref = timeout.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        *timeout_ref = Some(Timeout::new(duration, move || inner_callback()));
    })
}

/// Only one file is analysed at a time, so extra files in a drop or paste are ignored.
pub fn first_file(file_list: &FileList) -> Option<GlooFile> {
    if file_list.length() > 1 {
        log::info!("{} files supplied, using the first", file_list.length());
    }
    file_list.item(0).map(GlooFile::from)
}

pub fn shorten(name: &str, max: usize) -> String {
    if name.chars().count() > max {
        let head: String = name.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_keeps_short_names() {
        assert_eq!(shorten("clip.mp4", 20), "clip.mp4");
    }

    #[test]
    fn test_shorten_truncates_on_char_boundaries() {
        assert_eq!(shorten("a-very-long-screenshot-name.png", 20), "a-very-long-scree...");
        assert_eq!(shorten("éééééééééééééééééééééé.txt", 10), "ééééééé...");
    }
}
