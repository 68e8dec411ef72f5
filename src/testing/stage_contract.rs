use crate::stage::Stage;
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes)
    fn samples() -> &'static [&'static str] {
        &["Hello World 123", " déjà-vu ", "TEST", ""]
    }

    /// Samples that should pass through unchanged (zero-copy test).
    ///
    /// Default: common ASCII patterns that most stages should pass through unchanged.
    fn should_pass_through() -> &'static [&'static str] {
        &[
            "hello",   // Simple lowercase
            "world",   // Another simple word
            "test123", // Alphanumeric
            "abc def", // Simple phrase with space
            "",        // Empty string
        ]
    }

    /// Input/output pairs that verify correct transformations.
    ///
    /// Return empty slice if stage doesn't have predictable transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies all universal stage contracts.
///
/// 1. `zero_copy_when_no_changes` → no allocation when input == output
/// 2. `stage_is_idempotent` → applying twice yields same result as once
/// 3. `needs_apply_is_accurate` → correctly predicts whether apply() would change text
/// 4. `handles_empty_string_and_ascii` → graceful on edge cases
/// 5. `no_panic_on_mixed_scripts` → survives pathological real-world input
/// 6. (Implicit) `Send + Sync + 'static` → required by trait bounds
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::needs_apply_is_accurate($stage);
        $crate::testing::stage_contract::handles_empty_string_and_ascii($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    for &input in S::samples() {
        let mut text = Cow::Borrowed(input);

        // First pass – respect needs_apply
        if stage.needs_apply(&text) {
            let old_ptr = text.as_ref() as *const str;
            text = stage.apply(text);
            // If we allocated, pointer must have changed (apply trusts needs_apply)
            assert_ne!(old_ptr, text.as_ref() as *const str);
        } else {
            // No change needed → must remain borrowed with identical pointer
            assert_eq!(input as *const str, text.as_ref() as *const str);
        }

        // Second pass – must never allocate again (idempotency + zero-copy)
        let old_ptr = text.as_ref() as *const str;
        if stage.needs_apply(&text) {
            text = stage.apply(text);
        }
        assert_eq!(
            old_ptr,
            text.as_ref() as *const str,
            "zero-copy violated on second idempotent pass (input: `{input}`)"
        );
    }

    // Pass-through samples must always be zero-copy and unchanged
    for &pass_through in S::should_pass_through() {
        let text = stage.apply(Cow::Borrowed(pass_through));
        assert_eq!(text.as_ref(), pass_through);
        assert_eq!(
            pass_through as *const str,
            text.as_ref() as *const str,
            "zero-copy violated on pass-through sample (input: `{pass_through}`)"
        );
    }

    // Transformation samples – allocation expected
    for &(input, expected) in S::should_transform() {
        assert!(
            stage.needs_apply(input),
            "needs_apply() missed a transform sample `{input}`"
        );
        assert_eq!(stage.apply(Cow::Borrowed(input)).as_ref(), expected);
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    let transformed = S::should_transform().iter().map(|&(input, _)| input);
    for input in S::samples().iter().copied().chain(transformed) {
        let once = stage.apply(Cow::Borrowed(input));
        let twice = stage.apply(once.clone());
        assert_eq!(once, twice, "apply() not idempotent on `{input}`");
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: S) {
    // 1. Stage-provided samples (these are the most important ones)
    for &sample in S::samples() {
        check_accuracy(&stage, sample);
    }
    // 2. Explicit “must not trigger” set – pure ASCII
    let must_not_touch = ["", "hello", "world123", " !@#"];
    for &clean in &must_not_touch {
        check_accuracy(&stage, clean);
    }
}

#[inline(always)]
fn check_accuracy<S: Stage>(stage: &S, input: &str) {
    let predicted = stage.needs_apply(input);
    // Owned input so stages that always allocate are not penalised.
    let output = stage.apply(Cow::Owned(input.to_owned()));
    let actually_changes = output != input;
    assert_eq!(
        predicted,
        actually_changes,
        "needs_apply() mismatch for stage `{}` on `{input}`\n\
         predicted: {predicted}\n\
         actual   : {actually_changes} (output = {output:?})",
        stage.name(),
    );
}

pub fn handles_empty_string_and_ascii<S: StageTestConfig>(stage: S) {
    assert!(!stage.needs_apply(""));
    assert_eq!(stage.apply(Cow::Borrowed("")).as_ref(), "");
    // Pure ASCII must not be semantically altered
    let ascii = "hello world 123 !@#";
    assert_eq!(stage.apply(Cow::Borrowed(ascii)).as_ref(), ascii);
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    let _ = stage.apply(Cow::Borrowed(
        "Hello 世界 русский Türkçe العربية 简体中文 ﬃ ⑽",
    ));
}
