//! Property-based tests for the posting model.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use std::sync::Arc;
use tierfeed::core::{ActivityKind, RecordingSubscriber, Tier, UserState};
use tierfeed::snapshot::UserSnapshot;
use tierfeed::{FeedError, User};

prop_compose! {
    fn arbitrary_tier()(premium in any::<bool>()) -> Tier {
        if premium { Tier::Premium } else { Tier::Regular }
    }
}

proptest! {
    #[test]
    fn regular_post_is_identity(content in ".*") {
        let mut state = UserState::regular();
        let publication = state.post(&content);
        prop_assert_eq!(publication.content, content);
    }

    #[test]
    fn premium_post_is_uppercase(content in ".*") {
        let mut state = UserState::premium();
        let publication = state.post(&content);
        prop_assert_eq!(publication.content, content.to_uppercase());
    }

    #[test]
    fn transform_depends_only_on_active_tier(
        first in arbitrary_tier(),
        second in arbitrary_tier(),
        content in "[a-zA-Z ]{0,20}",
    ) {
        let mut user = User::new("Alice", UserState::new(first));
        user.set_state(UserState::new(second));
        prop_assert_eq!(user.comment(&content).content, second.transform(&content));
    }

    #[test]
    fn every_subscriber_notified_once_in_order(
        count in 0usize..12,
        tier in arbitrary_tier(),
        content in "[a-z]{1,10}",
    ) {
        let subscribers: Vec<_> = (0..count)
            .map(|i| Arc::new(RecordingSubscriber::new(format!("sub-{}", i))))
            .collect();
        let mut user = User::new("Alice", UserState::new(tier));
        for subscriber in &subscribers {
            user.subscribe(subscriber.clone());
        }

        let post = user.post(&content);
        let comment = user.comment(&content);

        prop_assert_eq!(post.notified, count);
        prop_assert_eq!(comment.notified, count);
        for subscriber in &subscribers {
            let received = subscriber.received();
            prop_assert_eq!(received.len(), 2);
            prop_assert_eq!(received[0].kind, ActivityKind::Post);
            prop_assert_eq!(received[1].kind, ActivityKind::Comment);
            prop_assert_eq!(&received[0].content, &tier.transform(&content));
        }
    }

    #[test]
    fn set_state_always_empties_subscribers(
        count in 0usize..8,
        from in arbitrary_tier(),
        to in arbitrary_tier(),
    ) {
        let mut user = User::new("Alice", UserState::new(from));
        for i in 0..count {
            user.subscribe(Arc::new(RecordingSubscriber::new(format!("sub-{}", i))));
        }

        user.set_state(UserState::new(to));

        prop_assert_eq!(user.subscriber_count(), 0);
        prop_assert_eq!(user.post("x").notified, 0);
        prop_assert_eq!(user.history().total_dropped(), count);
    }

    #[test]
    fn unsubscribing_stranger_fails(count in 0usize..6, tier in arbitrary_tier()) {
        let mut user = User::new("Alice", UserState::new(tier));
        for i in 0..count {
            user.subscribe(Arc::new(RecordingSubscriber::new(format!("sub-{}", i))));
        }
        let stranger = Arc::new(RecordingSubscriber::new("stranger"));

        let result = user.unsubscribe(&stranger);

        prop_assert_eq!(
            result,
            Err(FeedError::SubscriberNotFound { name: "stranger".to_string() })
        );
        prop_assert_eq!(user.subscriber_count(), count);
    }

    #[test]
    fn history_path_follows_switches(tiers in prop::collection::vec(arbitrary_tier(), 1..10)) {
        let mut user = User::new("Alice", UserState::regular());
        for tier in &tiers {
            user.set_state(UserState::new(*tier));
        }

        let mut expected = vec![Tier::Regular];
        expected.extend(tiers.iter().copied());
        prop_assert_eq!(user.history().get_path(), expected);
    }

    #[test]
    fn restored_snapshot_keeps_tier_and_history(
        tiers in prop::collection::vec(arbitrary_tier(), 0..6)
    ) {
        let mut user = User::new("Alice", UserState::regular());
        for tier in &tiers {
            user.subscribe(Arc::new(RecordingSubscriber::new("Bob")));
            user.set_state(UserState::new(*tier));
        }

        let bytes = UserSnapshot::capture(&user).to_binary().unwrap();
        let restored = UserSnapshot::from_binary(&bytes).unwrap().restore().unwrap();

        prop_assert_eq!(restored.tier(), user.tier());
        prop_assert_eq!(restored.history(), user.history());
        prop_assert_eq!(restored.subscriber_count(), 0);
    }
}

#[test]
fn alice_and_bob_walkthrough() {
    let bob = Arc::new(RecordingSubscriber::new("Bob"));
    let mut alice = User::new("Alice", UserState::regular());
    alice.subscribe(bob.clone());

    let post = alice.post("Hello World");
    assert_eq!(post.to_string(), "Regular user posted: Hello World");
    assert_eq!(bob.received()[0].content, "Hello World");

    alice.set_state(UserState::premium());
    let post = alice.post("Hello World");
    assert_eq!(post.to_string(), "Premium user posted: HELLO WORLD");
    assert_eq!(post.notified, 0);
    assert_eq!(bob.count(), 1);

    alice.subscribe(bob.clone());
    alice.post("Hello World");
    assert_eq!(bob.received()[1].content, "HELLO WORLD");

    alice.unsubscribe(&bob).unwrap();
    assert!(alice.unsubscribe(&bob).is_err());
}
