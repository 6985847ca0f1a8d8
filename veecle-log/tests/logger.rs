#![expect(missing_docs, reason = "tests")]
#![cfg(not(feature = "disable"))]

use pretty_assertions::assert_eq;
use test_case::test_case;
use veecle_log::sink::{Sink, TestSink};
use veecle_log::{Level, Logger, args};

/// Emits one message per level and returns the output of each emitted call.
fn emit_all(logger: &mut Logger<'_>, output: &TestSink) -> Vec<(Level, String)> {
    let mut emitted = Vec::new();
    for level in Level::ALL {
        logger.log(level, "x", &[]).unwrap();
        let text = output.take();
        if !text.is_empty() {
            emitted.push((level, text));
        }
    }
    emitted
}

#[test]
fn emits_exactly_up_to_the_threshold() {
    for threshold in Level::ALL {
        let (mut sink, _) = TestSink::new();
        let output = sink.clone();
        let mut logger: Logger<'_> = Logger::new();
        logger.begin(threshold, &mut sink, false);

        let emitted: Vec<Level> = emit_all(&mut logger, &output)
            .into_iter()
            .map(|(level, _)| level)
            .collect();
        let expected: Vec<Level> = Level::ALL
            .into_iter()
            .filter(|&level| level != Level::Silent && level <= threshold)
            .collect();

        assert_eq!(emitted, expected, "threshold {threshold}");
    }
}

#[test_case(-5, Level::Silent)]
#[test_case(0, Level::Silent)]
#[test_case(3, Level::Warning)]
#[test_case(6, Level::Verbose)]
#[test_case(99, Level::Verbose)]
fn raw_levels_are_clamped(raw: i32, expected: Level) {
    let (mut sink, _) = TestSink::new();
    let output = sink.clone();
    let mut logger: Logger<'_> = Logger::new();
    logger.begin(Level::Verbose, &mut sink, true);
    logger.set_level(raw);
    assert_eq!(logger.level(), expected);

    let emitted = emit_all(&mut logger, &output);
    assert_eq!(emitted.len(), usize::from(expected.to_raw()));
}

#[test]
fn level_tags() {
    let (mut sink, _) = TestSink::new();
    let output = sink.clone();
    let mut logger: Logger<'_> = Logger::new();
    logger.begin(Level::Verbose, &mut sink, true);

    logger.fatal("a", &[]);
    logger.error("b", &[]);
    logger.warning("c", &[]);
    logger.notice("d", &[]);
    logger.trace("e", &[]);
    logger.verbose("f", &[]);

    assert_eq!(output.take(), "F: aE: bW: cN: dT: eV: f");
}

#[test]
fn tags_can_be_hidden() {
    let (mut sink, _) = TestSink::new();
    let output = sink.clone();
    let mut logger: Logger<'_> = Logger::new();
    logger.begin(Level::Verbose, &mut sink, false);

    logger.error("count=%d", &args![3]);
    assert_eq!(output.take(), "count=3");

    logger.set_show_level(true);
    logger.error("count=%d", &args![4]);
    assert_eq!(output.take(), "E: count=4");
}

fn prefix(sink: &mut dyn Sink) {
    sink.write_str("<");
}

fn suffix(sink: &mut dyn Sink) {
    sink.write_str(">");
}

#[test]
fn hooks_wrap_each_emitted_message_once() {
    let (mut sink, _) = TestSink::new();
    let output = sink.clone();
    let mut logger: Logger<'_> = Logger::new();
    logger.begin(Level::Warning, &mut sink, true);
    logger.set_prefix(Some(prefix));
    logger.set_suffix(Some(suffix));

    logger.warning("%s", &args!["body"]);
    assert_eq!(output.take(), "<W: body>");

    logger.notice("filtered", &[]);
    logger.verbose("filtered", &[]);
    assert_eq!(output.take(), "");

    logger.error("a", &[]);
    logger.fatal("b", &[]);
    assert_eq!(output.take(), "<E: a><F: b>");
}

#[test]
fn hooks_run_around_failed_substitutions() {
    let (mut sink, _) = TestSink::new();
    let output = sink.clone();
    let mut logger: Logger<'_> = Logger::new();
    logger.begin(Level::Verbose, &mut sink, false);
    logger.set_prefix(Some(prefix));
    logger.set_suffix(Some(suffix));

    assert!(logger.log(Level::Notice, "%d then %s", &args!["oops"]).is_err());
    assert_eq!(output.take(), "<%!d then %!s>");
}

#[test]
fn output_can_be_replaced() {
    let (mut first, _) = TestSink::new();
    let (mut second, _) = TestSink::new();
    let first_output = first.clone();
    let second_output = second.clone();

    let mut logger: Logger<'_> = Logger::new();
    logger.begin(Level::Notice, &mut first, false);
    logger.notice("one", &[]);
    logger.set_output(&mut second);
    logger.notice("two", &[]);

    assert_eq!(first_output.take(), "one");
    assert_eq!(second_output.take(), "two");
}
