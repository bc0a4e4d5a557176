//! Property tests for answer collection and score interpretation.

use std::collections::BTreeMap;
use std::sync::Arc;

use proptest::prelude::*;

use fiber_survey::adapters::document_store::InMemoryDocumentStore;
use fiber_survey::application::{
    GetSurveyResultHandler, GetSurveyResultQuery, SubmitSurveyCommand, SubmitSurveyHandler,
};
use fiber_survey::domain::foundation::RecordId;
use fiber_survey::domain::survey::{AnswerSet, Band, Interpretation, SurveyError, SurveyVariant};

const COLLECTION: &str = "surveyData";

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

fn variant_strategy() -> impl Strategy<Value = SurveyVariant> {
    prop_oneof![Just(SurveyVariant::Habits), Just(SurveyVariant::Fiber)]
}

/// A complete answer set: one option index per question.
fn complete_answers(variant: SurveyVariant) -> impl Strategy<Value = BTreeMap<String, u32>> {
    let questions = variant.questions();
    let choices: Vec<_> = questions
        .iter()
        .map(|q| (0..q.options.len()).prop_map(move |i| (q.key.to_string(), q.options[i].value)))
        .collect();
    choices.prop_map(|pairs| pairs.into_iter().collect())
}

fn command(variant: SurveyVariant, answers: BTreeMap<String, u32>) -> SubmitSurveyCommand {
    SubmitSurveyCommand {
        variant,
        name: "학생".to_string(),
        student_id: "20240001".to_string(),
        answers,
    }
}

proptest! {
    #[test]
    fn prop_complete_submission_total_matches_selection_and_read_back(
        (variant, answers) in variant_strategy()
            .prop_flat_map(|v| (Just(v), complete_answers(v)))
    ) {
        let expected: i64 = answers.values().map(|v| i64::from(*v)).sum();
        let store = Arc::new(InMemoryDocumentStore::new());
        let submit = SubmitSurveyHandler::new(store.clone(), COLLECTION);
        let read = GetSurveyResultHandler::new(store.clone(), COLLECTION);

        let (submitted, loaded) = runtime().block_on(async {
            let submitted = submit.handle(command(variant, answers)).await.unwrap();
            let loaded = read
                .handle(GetSurveyResultQuery { record_id: submitted.record_id.clone() })
                .await
                .unwrap()
                .unwrap();
            (submitted, loaded)
        });

        prop_assert_eq!(submitted.total_score, expected);
        prop_assert!(submitted.total_score <= i64::from(variant.max_score()));
        prop_assert_eq!(loaded.interpretation.total_score(), expected);
        let chart_sum: i64 = loaded.interpretation.chart().iter().map(|p| p.value).sum();
        prop_assert_eq!(chart_sum, expected);
        prop_assert_eq!(loaded.interpretation.chart().len(), variant.question_count());
    }

    #[test]
    fn prop_incomplete_submission_never_writes(
        (variant, answers, keep) in variant_strategy()
            .prop_flat_map(|v| (
                Just(v),
                complete_answers(v),
                proptest::collection::vec(any::<bool>(), v.question_count()),
            ))
            .prop_filter("at least one answer missing", |(_, _, keep)| keep.iter().any(|k| !k))
    ) {
        let partial: BTreeMap<String, u32> = answers
            .into_iter()
            .zip(keep.iter())
            .filter(|(_, keep)| **keep)
            .map(|(pair, _)| pair)
            .collect();
        let answered = partial.len();
        let store = Arc::new(InMemoryDocumentStore::new());
        let submit = SubmitSurveyHandler::new(store.clone(), COLLECTION);

        let (result, count) = runtime().block_on(async {
            let result = submit.handle(command(variant, partial)).await;
            (result, store.count(COLLECTION).await)
        });

        prop_assert_eq!(
            result.unwrap_err(),
            SurveyError::incomplete(answered, variant.question_count())
        );
        prop_assert_eq!(count, 0);
    }

    #[test]
    fn prop_band_contains_its_score(score in -1_000i64..1_000) {
        let band = Band::for_score(score);
        let (low, high) = band.range();
        prop_assert!(low.map_or(true, |l| l <= score));
        prop_assert!(high.map_or(true, |h| score <= h));
    }

    #[test]
    fn prop_unknown_ids_read_as_absent(id in "[A-Za-z0-9_-]{1,24}") {
        let store = Arc::new(InMemoryDocumentStore::new());
        let read = GetSurveyResultHandler::new(store, COLLECTION);

        let loaded = runtime().block_on(async {
            read.handle(GetSurveyResultQuery { record_id: RecordId::new(id).unwrap() })
                .await
                .unwrap()
        });

        prop_assert!(loaded.is_none());
    }
}

#[test]
fn band_boundaries() {
    assert_eq!(Band::for_score(30), Band::NeedsImprovement);
    assert_eq!(Band::for_score(31), Band::Fair);
    assert_eq!(Band::for_score(65), Band::Fair);
    assert_eq!(Band::for_score(66), Band::Good);
}

#[test]
fn empty_answer_set_interprets_to_zero() {
    let interpretation = Interpretation::of(&AnswerSet::new());
    assert_eq!(interpretation.total_score(), 0);
    assert_eq!(interpretation.band(), Band::NeedsImprovement);
    assert!(interpretation.chart().is_empty());
}

#[test]
fn maximal_fiber_submission_is_good() {
    let answers: BTreeMap<String, u32> = [14, 10, 10, 8, 12, 8, 14, 14]
        .into_iter()
        .enumerate()
        .map(|(i, v)| (format!("question{}", i + 1), v))
        .collect();
    let store = Arc::new(InMemoryDocumentStore::new());
    let submit = SubmitSurveyHandler::new(store.clone(), COLLECTION);
    let read = GetSurveyResultHandler::new(store, COLLECTION);

    let loaded = runtime().block_on(async {
        let submitted = submit
            .handle(command(SurveyVariant::Fiber, answers))
            .await
            .unwrap();
        read.handle(GetSurveyResultQuery { record_id: submitted.record_id })
            .await
            .unwrap()
            .unwrap()
    });

    assert_eq!(loaded.interpretation.total_score(), 90);
    assert_eq!(loaded.interpretation.title(), "66 ~ 100점: 장내 환경이 양호한 상태");
}
