use super::*;
use crate::input::ResponseSet;
use crate::model::scale::ScaleDef;
use crate::pipeline::score::run_scoring;
use crate::questions::Questionnaire;

fn score_and_recommend(values: &[i64]) -> Recommendation {
    let questions = Questionnaire::builtin();
    let scale = ScaleDef::direct_v1();
    let responses = ResponseSet::new(values.to_vec(), &questions, &scale).unwrap();
    let outcome = run_scoring(&responses, &questions, &scale);
    run_recommend(outcome.score)
}

fn band_rank(band: HumilityBand) -> u8 {
    match band {
        HumilityBand::Low => 0,
        HumilityBand::Moderate => 1,
        HumilityBand::High => 2,
        HumilityBand::VeryHigh => 3,
    }
}

#[test]
fn test_band_boundaries_low() {
    assert_eq!(classify_band(2.0), HumilityBand::Low);
    assert_eq!(classify_band(3.0), HumilityBand::Low);
}

#[test]
fn test_band_boundaries_moderate() {
    assert_eq!(classify_band(3.1), HumilityBand::Moderate);
    assert_eq!(classify_band(6.0), HumilityBand::Moderate);
}

#[test]
fn test_band_boundaries_high() {
    assert_eq!(classify_band(6.1), HumilityBand::High);
    assert_eq!(classify_band(8.0), HumilityBand::High);
}

#[test]
fn test_band_boundaries_very_high() {
    assert_eq!(classify_band(8.1), HumilityBand::VeryHigh);
    assert_eq!(classify_band(10.0), HumilityBand::VeryHigh);
}

#[test]
fn test_bands_are_monotonic_over_achievable_totals() {
    let mut last = HumilityBand::Low;
    for total in 10u32..=50 {
        let score = HumilityScore::from_raw(total as f64 / 50.0 * 10.0);
        let band = classify_band(score.value());
        assert!(
            band_rank(band) >= band_rank(last),
            "band dropped at total {total}"
        );
        last = band;
    }
    assert_eq!(last, HumilityBand::VeryHigh);
}

#[test]
fn test_band_texts_match_their_band() {
    assert!(band_text(HumilityBand::Low).contains("active listening"));
    assert!(band_text(HumilityBand::Moderate).contains("journaling"));
    assert!(band_text(HumilityBand::High).contains("workshops"));
    assert!(band_text(HumilityBand::VeryHigh).contains("coaching"));
}

#[test]
fn test_neutral_answers_recommend_moderate() {
    let rec = score_and_recommend(&[3; 10]);
    assert_eq!(rec.band, HumilityBand::Moderate);
}

#[test]
fn test_uniform_fives_recommend_high() {
    let rec = score_and_recommend(&[5; 10]);
    assert_eq!(rec.band, HumilityBand::High);
}

#[test]
fn test_ideal_answers_recommend_very_high() {
    let rec = score_and_recommend(&[5, 5, 5, 5, 1, 1, 5, 5, 1, 5]);
    assert_eq!(rec.band, HumilityBand::VeryHigh);
    assert!(rec.text.contains("high intellectual humility"));
}

#[test]
fn test_worst_answers_recommend_low() {
    let rec = score_and_recommend(&[1, 1, 1, 1, 5, 5, 1, 1, 5, 1]);
    assert_eq!(rec.band, HumilityBand::Low);
}

#[test]
fn test_recommendation_is_deterministic() {
    let a = score_and_recommend(&[4, 2, 5, 3, 1, 2, 4, 5, 2, 3]);
    let b = score_and_recommend(&[4, 2, 5, 3, 1, 2, 4, 5, 2, 3]);
    assert_eq!(a.band, b.band);
    assert_eq!(a.text, b.text);
}
