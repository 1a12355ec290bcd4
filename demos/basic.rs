// Example: render a 10k-row list through a 600px viewport.
use windowed_list::{Align, WindowedList};

fn main() {
    let rows: Vec<String> = (0..10_000).map(|i| format!("row #{i}")).collect();
    let mut list =
        WindowedList::new(&rows, 100, 600, |row: &String, i| format!("[{i:>5}] {row}"))
            .with_buffer(5);

    list.on_scroll(2_050);
    let out = list.render();
    println!("spacer_extent={}", out.spacer_extent());
    println!("window={:?}", out.window);
    println!("translate_y={}", out.offset());
    for line in &out.children {
        println!("  {line}");
    }

    let off = list.windower_mut().scroll_to_index(9_999, Align::End);
    println!("after scroll_to_index: offset={off} window={:?}", list.window());
}
