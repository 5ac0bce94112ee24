//! Property-Based Tests for Immerse Core
//!
//! Uses `proptest` to check the behavior matrix, reputation and mood
//! invariants under random inputs.

use proptest::prelude::*;

use immerse_core::behavior::{MAX_SILENCE_SECONDS, MIN_SILENCE_SECONDS, compute_npc_behavior};
use immerse_core::mood::{Mood, MoodTrigger, compute_mood_shift, should_decay_mood};
use immerse_core::reputation::{REPUTATION_MAX, REPUTATION_MIN, clamp_reputation};
use immerse_core::types::{BigFiveProfile, CulturalOverlay};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_personality() -> impl Strategy<Value = BigFiveProfile> {
    (
        0.0..=1.0f32, // openness
        0.0..=1.0f32, // conscientiousness
        0.0..=1.0f32, // extraversion
        0.0..=1.0f32, // agreeableness
        0.0..=1.0f32, // neuroticism
    )
        .prop_map(|(o, c, e, a, n)| BigFiveProfile::new(o, c, e, a, n))
}

fn arb_culture() -> impl Strategy<Value = CulturalOverlay> {
    (0.0..=1.0f32, 0.0..=1.0f32, 0.0..=1.0f32, 0.0..=1.0f32)
        .prop_map(|(d, f, p, e)| CulturalOverlay::new(d, f, p, e))
}

fn arb_mood() -> impl Strategy<Value = Mood> {
    prop_oneof![
        Just(Mood::Neutral),
        Just(Mood::Pleased),
        Just(Mood::Warm),
        Just(Mood::Amused),
        Just(Mood::Busy),
        Just(Mood::Anxious),
        Just(Mood::Impatient),
        Just(Mood::Irritated),
        Just(Mood::Cold),
        Just(Mood::Panicking),
        "[a-z]{3,10}".prop_map(Mood::from),
    ]
}

fn arb_reputation() -> impl Strategy<Value = f32> {
    REPUTATION_MIN..=REPUTATION_MAX
}

// ---------------------------------------------------------------------------
// Property: every modifier stays in range
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn modifiers_always_in_unit_range(
        personality in arb_personality(),
        culture in arb_culture(),
        mood in arb_mood(),
        reputation in arb_reputation(),
        patience_level in 0.0..=1.0f32,
    ) {
        let m = compute_npc_behavior(&personality, &mood, reputation, &culture, patience_level);
        for value in [
            m.response_length,
            m.patience,
            m.helpfulness,
            m.register_strictness,
            m.topic_initiative,
            m.expressiveness,
            m.escalation_tendency,
        ] {
            prop_assert!((0.0..=1.0).contains(&value), "modifier out of range: {value}");
        }
        prop_assert!(m.silence_tolerance_seconds >= MIN_SILENCE_SECONDS);
        prop_assert!(m.silence_tolerance_seconds <= MAX_SILENCE_SECONDS);
    }
}

// ---------------------------------------------------------------------------
// Property: behavior is a pure function
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn behavior_is_deterministic(
        personality in arb_personality(),
        culture in arb_culture(),
        mood in arb_mood(),
        reputation in arb_reputation(),
    ) {
        let a = compute_npc_behavior(&personality, &mood, reputation, &culture, 0.5);
        let b = compute_npc_behavior(&personality, &mood, reputation, &culture, 0.5);
        prop_assert_eq!(a, b);
    }
}

// ---------------------------------------------------------------------------
// Property: monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn patience_never_drops_with_better_reputation(
        personality in arb_personality(),
        culture in arb_culture(),
        mood in arb_mood(),
        low in arb_reputation(),
        high in arb_reputation(),
    ) {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        let a = compute_npc_behavior(&personality, &mood, low, &culture, 0.5);
        let b = compute_npc_behavior(&personality, &mood, high, &culture, 0.5);
        prop_assert!(b.patience >= a.patience);
        prop_assert!(b.helpfulness >= a.helpfulness);
    }

    #[test]
    fn strictness_never_drops_with_formality(
        personality in arb_personality(),
        culture in arb_culture(),
        mood in arb_mood(),
        reputation in arb_reputation(),
        bump in 0.0..=1.0f32,
    ) {
        let formal = CulturalOverlay::new(
            culture.communicative_directness,
            culture.formality_default + bump,
            culture.power_distance_sensitivity,
            culture.emotional_expressiveness,
        );
        let a = compute_npc_behavior(&personality, &mood, reputation, &culture, 0.5);
        let b = compute_npc_behavior(&personality, &mood, reputation, &formal, 0.5);
        prop_assert!(b.register_strictness >= a.register_strictness);
    }

    #[test]
    fn irritation_costs_patience(
        personality in arb_personality(),
        culture in arb_culture(),
        reputation in arb_reputation(),
    ) {
        let neutral = compute_npc_behavior(&personality, &Mood::Neutral, reputation, &culture, 0.5);
        let irritated = compute_npc_behavior(&personality, &Mood::Irritated, reputation, &culture, 0.5);
        prop_assert!(irritated.patience <= neutral.patience);
        prop_assert!(irritated.register_strictness >= neutral.register_strictness);
        prop_assert!(irritated.escalation_tendency >= neutral.escalation_tendency);
    }

    #[test]
    fn below_the_ceiling_reputation_strictly_raises_patience(
        personality in arb_personality(),
        culture in arb_culture(),
        mood in arb_mood(),
        low in REPUTATION_MIN..0.0f32,
        gain in 0.05..=0.5f32,
    ) {
        let a = compute_npc_behavior(&personality, &mood, low, &culture, 0.5);
        prop_assume!(a.patience < 1.0);
        let b = compute_npc_behavior(&personality, &mood, low + gain, &culture, 0.5);
        prop_assert!(b.patience > a.patience);
    }

    #[test]
    fn below_the_ceiling_formality_strictly_raises_strictness(
        personality in arb_personality(),
        culture in arb_culture(),
        mood in arb_mood(),
        bump in 0.05..=0.5f32,
    ) {
        prop_assume!(culture.formality_default + bump <= 1.0);
        let a = compute_npc_behavior(&personality, &mood, 0.0, &culture, 0.5);
        prop_assume!(a.register_strictness < 1.0);
        let formal = CulturalOverlay { formality_default: culture.formality_default + bump, ..culture };
        let b = compute_npc_behavior(&personality, &mood, 0.0, &formal, 0.5);
        prop_assert!(b.register_strictness > a.register_strictness);
    }

    #[test]
    fn below_the_ceiling_irritation_strictly_costs_patience(
        personality in arb_personality(),
        culture in arb_culture(),
        reputation in arb_reputation(),
    ) {
        let neutral = compute_npc_behavior(&personality, &Mood::Neutral, reputation, &culture, 0.5);
        prop_assume!(neutral.patience < 1.0);
        let irritated = compute_npc_behavior(&personality, &Mood::Irritated, reputation, &culture, 0.5);
        prop_assert!(irritated.patience < neutral.patience);
    }
}

// ---------------------------------------------------------------------------
// Property: reputation clamp
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn reputation_always_clamped(start in arb_reputation(), delta in -100.0..100.0f32) {
        let next = clamp_reputation(start + delta);
        prop_assert!(next >= REPUTATION_MIN);
        prop_assert!(next <= REPUTATION_MAX);
    }
}

// ---------------------------------------------------------------------------
// Property: mood transitions
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn unknown_events_keep_the_mood(
        personality in arb_personality(),
        mood in arb_mood(),
        event in "[A-Z]{4,12}",
    ) {
        prop_assert_eq!(compute_mood_shift(&mood, &event, &personality), mood);
    }

    #[test]
    fn known_triggers_ignore_the_current_mood(
        personality in arb_personality(),
        a in arb_mood(),
        b in arb_mood(),
        index in 0usize..MoodTrigger::ALL.len(),
    ) {
        let trigger = MoodTrigger::ALL[index].as_str();
        prop_assert_eq!(
            compute_mood_shift(&a, trigger, &personality),
            compute_mood_shift(&b, trigger, &personality)
        );
    }

    #[test]
    fn neutral_never_decays(turns in 0u32..10_000) {
        prop_assert!(!should_decay_mood(&Mood::Neutral, turns));
    }
}
