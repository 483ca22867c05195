use slotmap::SlotMap;
use super::*;

fn keys(count: usize) -> Vec<NodeKey> {
    let mut nodes: SlotMap<NodeKey, ()> = SlotMap::with_key();
    (0..count).map(|_| nodes.insert(())).collect()
}

#[test]
fn test_empty_view() {
    let view = PaintView::new();
    assert_eq!(view.visible_count(), 0);
    assert_eq!(view.culled_count(), 0);
    assert!(view.visible().is_empty());
}

#[test]
fn test_push_keeps_paint_order_and_index() {
    let nodes = keys(3);
    let mut view = PaintView::new();

    for (i, &node) in nodes.iter().enumerate() {
        view.push(PaintEntry {
            node,
            result: Some(if i == 1 { CullResult::Partial } else { CullResult::In }),
            paint_box: Some(ActorBox::new(0.0, 0.0, i as f32, i as f32)),
        });
    }

    let order: Vec<NodeKey> = view.visible().iter().map(|entry| entry.node).collect();
    assert_eq!(order, nodes);
    assert_eq!(view.entry(nodes[1]).unwrap().result, Some(CullResult::Partial));
    assert_eq!(view.entry(nodes[2]).unwrap().paint_box.unwrap().x2, 2.0);
}

#[test]
fn test_is_visible_and_culled_count() {
    let nodes = keys(2);
    let mut view = PaintView::new();
    view.push(PaintEntry { node: nodes[0], result: None, paint_box: None });
    view.add_culled(4);
    view.add_culled(1);

    assert!(view.is_visible(nodes[0]));
    assert!(!view.is_visible(nodes[1]));
    assert!(view.entry(nodes[1]).is_none());
    assert_eq!(view.culled_count(), 5);
}
