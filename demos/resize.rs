// Example: an adapter feeding resize and scroll events; `on_change` only fires when the window moves.
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use windowed_list::{Window, WindowOptions, Windower};

fn main() {
    let renders = Arc::new(AtomicUsize::new(0));
    let mut w = Windower::new(
        WindowOptions::new(5_000, 20)
            .with_buffer(2)
            .with_initial_container_size(200)
            .with_on_change(Some({
                let renders = Arc::clone(&renders);
                move |window: &Window| {
                    renders.fetch_add(1, Ordering::Relaxed);
                    println!("on_change: range={:?}", window.range);
                }
            })),
    );

    // A slow drag: most steps stay inside the same row and are not reported.
    for step in 0..40u64 {
        w.set_scroll_offset(step * 3);
    }

    // The window grows; the offset is pulled back so the viewport stays filled.
    w.apply_viewport_frame(1_000, u64::MAX);
    println!(
        "after resize: offset={} max={}",
        w.scroll_offset(),
        w.max_scroll_offset()
    );

    // Shrink the data set while scrolled near the old end.
    w.set_count(30);
    println!("after shrink: offset={} window={:?}", w.scroll_offset(), w.window());

    println!("renders={}", renders.load(Ordering::Relaxed));
}
