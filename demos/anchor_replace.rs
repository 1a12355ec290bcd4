// Example: prepend older messages without the viewport jumping.
use windowed_list::WindowedList;

struct Message {
    id: u64,
    body: String,
}

fn messages(ids: impl Iterator<Item = u64>) -> Vec<Message> {
    ids.map(|id| Message {
        id,
        body: format!("message {id}"),
    })
    .collect()
}

fn main() {
    let page = messages(100..200);
    let with_history = messages(0..200);
    let mut list = WindowedList::new(&page, 24, 240, |m: &Message, _| m.body.clone());
    list.on_scroll(24 * 40 + 7);
    println!("before: first={:?}", list.render().children.first());

    let anchor = list.capture_anchor(|m| m.id).expect("items are visible");

    let kept = list.replace_items_anchored(&with_history, &anchor, |m| m.id);
    println!(
        "after: kept={kept} offset={} first={:?}",
        list.windower().scroll_offset(),
        list.render().children.first()
    );
}
