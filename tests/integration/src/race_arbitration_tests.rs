//! Arbitration tests for overlapping and racing unlock requests
//!
//! The properties here are the reason the controller exists: a superseded
//! window must never relock early, an explicit lock must stick, and no
//! interleaving may produce two effective relocks.

use crate::test_utils::*;
use std::time::Duration;
use strikegate_core::StrikeState;

#[tokio::test(start_paused = true)]
async fn second_window_extends_past_first_expiry() {
    let (controller, strike) = test_controller();

    controller
        .unlock_for_duration(Duration::from_secs(5), "alice")
        .unwrap();
    advance(Duration::from_secs(1)).await;
    controller
        .unlock_for_duration(Duration::from_secs(20), "bob")
        .unwrap();

    // Continuously unlocked across alice's would-be expiry at t=5s
    for _ in 0..4 {
        advance(Duration::from_secs(2)).await;
        assert_eq!(controller.state(), StrikeState::Unlocked);
        assert!(strike.is_energized());
    }

    // Bob's window ends at t = 1s + 20s
    advance(Duration::from_secs(13)).await;
    assert_eq!(controller.state(), StrikeState::Locked);
    assert!(!strike.is_energized());
}

#[tokio::test(start_paused = true)]
async fn explicit_lock_wins_over_pending_window() {
    let (controller, strike) = test_controller();

    controller
        .unlock_for_duration(Duration::from_secs(10), "alice")
        .unwrap();
    advance(Duration::from_secs(2)).await;
    controller.lock("security-desk");

    assert_eq!(controller.state(), StrikeState::Locked);
    assert!(!strike.is_energized());

    // Alice's timer fires at t=10s against a cleared session
    advance(Duration::from_secs(10)).await;
    assert_eq!(controller.state(), StrikeState::Locked);
    assert!(!strike.is_energized());
}

#[tokio::test(start_paused = true)]
async fn open_ended_unlock_outlives_timed_window() {
    let (controller, strike) = test_controller();

    controller
        .unlock_for_duration(Duration::from_secs(10), "alice")
        .unwrap();
    advance(Duration::from_secs(2)).await;
    controller.unlock("maintenance");

    advance(Duration::from_secs(120)).await;
    assert_eq!(controller.state(), StrikeState::Unlocked);
    assert!(strike.is_energized());

    controller.lock("maintenance");
    assert_eq!(controller.state(), StrikeState::Locked);
}

#[tokio::test(start_paused = true)]
async fn racing_unlocks_settle_on_single_relock() {
    let (controller, strike) = test_controller();

    let mut handles = Vec::new();
    for i in 1..=16u64 {
        let controller = controller.clone();
        handles.push(tokio::spawn(async move {
            controller
                .unlock_for_duration(Duration::from_secs(i), &format!("caller-{i}"))
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    // Whichever call committed last holds the window; the door must be
    // open now and locked again once every requested duration has passed.
    assert_eq!(controller.state(), StrikeState::Unlocked);
    assert!(strike.is_energized());

    advance(Duration::from_secs(17)).await;
    assert_eq!(controller.state(), StrikeState::Locked);
    assert!(!strike.is_energized());

    // No late timer may reopen or re-close the door
    advance(Duration::from_secs(30)).await;
    assert_eq!(controller.state(), StrikeState::Locked);
    assert!(!strike.is_energized());
}

#[tokio::test(start_paused = true)]
async fn clones_share_one_door() {
    let (controller, strike) = test_controller();
    let other = controller.clone();

    controller
        .unlock_for_duration(Duration::from_secs(5), "alice")
        .unwrap();
    assert_eq!(other.state(), StrikeState::Unlocked);

    other.lock("bob");
    assert_eq!(controller.state(), StrikeState::Locked);
    assert!(!strike.is_energized());
}
