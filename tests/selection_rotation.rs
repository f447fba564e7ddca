use feed_core::compare::{CompareState, SelectionSet};
use feed_core::feed::{EventOutcome, FeedConfig, FeedEngine, FeedEvent};
use feed_core::post::{Author, Post, PostId, PostStore, UserId};

fn pid(s: &str) -> PostId {
    PostId::new(s).unwrap()
}

fn make_engine(ids: &[&str]) -> FeedEngine {
    let posts = ids
        .iter()
        .map(|id| {
            let mut post = Post::new(pid(id), Author::new(UserId::new("u").unwrap(), "U"), 75);
            post.code = format!("fn {id}() {{}}");
            post
        })
        .collect();
    FeedEngine::new(PostStore::from_posts(posts).unwrap(), FeedConfig::v0())
}

#[test]
fn toggling_three_evicts_the_first() {
    let set = SelectionSet::new()
        .toggle(&pid("a"))
        .toggle(&pid("b"))
        .toggle(&pid("c"));
    assert_eq!(set.ids(), &[pid("b"), pid("c")]);
}

#[test]
fn toggling_a_member_removes_it() {
    let set = SelectionSet::new().toggle(&pid("a")).toggle(&pid("b"));
    assert_eq!(set.toggle(&pid("a")).ids(), &[pid("b")]);
}

#[test]
fn engine_walks_the_compare_states() {
    let mut engine = make_engine(&["a", "b", "c"]);
    assert_eq!(engine.selection().compare_state(), CompareState::Empty);
    assert!(engine.comparison().is_none());

    engine.toggle_selection(&pid("a"));
    assert_eq!(engine.selection().compare_state(), CompareState::Single);
    assert!(engine.comparison().is_none());

    engine.toggle_selection(&pid("b"));
    assert_eq!(engine.selection().compare_state(), CompareState::Ready);

    engine.toggle_selection(&pid("c"));
    assert_eq!(engine.selection().ids(), &[pid("b"), pid("c")]);

    engine.toggle_selection(&pid("b"));
    assert_eq!(engine.selection().compare_state(), CompareState::Single);

    engine.clear_selection();
    assert!(engine.selection().is_empty());
}

#[test]
fn comparison_returns_full_posts_in_selection_order() {
    let mut engine = make_engine(&["a", "b", "c"]);

    // Selected against store order on purpose.
    engine.toggle_selection(&pid("c"));
    engine.toggle_selection(&pid("a"));

    let (first, second) = engine.comparison().expect("two posts selected");
    assert_eq!(first.id, pid("c"));
    assert_eq!(second.id, pid("a"));
    assert_eq!(first.code, "fn c() {}");
    assert_ne!(first.version(), second.version());
}

#[test]
fn toggling_unknown_post_is_ignored() {
    let mut engine = make_engine(&["a"]);
    let outcome = engine.dispatch(FeedEvent::ToggleSelection { post: pid("ghost") });

    assert_eq!(outcome, EventOutcome::UnknownPost(pid("ghost")));
    assert!(engine.selection().is_empty());
}
