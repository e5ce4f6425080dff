use std::io::Cursor;
use std::sync::Arc;
use std::thread;

use ash_cli::{build_responder, AppConfig, ChatSession, SessionSummary, DISCLAIMER, FAREWELL};
use ash_core::tables::{BREAKUP_COMFORT_REPLIES, CAT_REPLIES, NEUTRAL_REPLIES};
use ash_core::{FixedPicker, Locale, Responder, Route, SeededPicker, SeverityLevel};
use ash_observability::AppMetrics;

fn run_session(responder: &Responder, script: &str, json: bool) -> (String, SessionSummary) {
    let mut output = Vec::new();
    let summary = ChatSession::new(responder, Locale::Taiwan, AppMetrics::shared())
        .with_json(json)
        .run(Cursor::new(script.as_bytes()), &mut output)
        .expect("session should run");
    (String::from_utf8(output).expect("utf8 output"), summary)
}

#[test]
fn chat_greets_replies_and_says_goodbye() {
    let responder = Responder::new(Arc::new(FixedPicker(0)));
    let script = "我們分手了\n我想設定目標\n掰掰\n我的貓\n";
    let (output, summary) = run_session(&responder, script, false);

    assert!(output.starts_with(responder.greet()));
    assert!(output.contains(DISCLAIMER));
    assert!(output.contains(&format!("Ash 說：{}", BREAKUP_COMFORT_REPLIES.replies[0])));
    assert!(output.contains("Ash 說：設定目標是很棒的第一步"));
    assert!(!output.contains(CAT_REPLIES.replies[0]));
    assert!(output.trim_end().ends_with(FAREWELL));
    assert_eq!(summary.turns, 2);
    assert!(summary.exited_by_token);
}

#[test]
fn end_of_input_also_ends_the_session() {
    let responder = Responder::new(Arc::new(FixedPicker(1)));
    let (output, summary) = run_session(&responder, "今天下雨\n", false);

    assert!(output.contains(&format!("Ash 說：{}", NEUTRAL_REPLIES.replies[1])));
    assert!(output.trim_end().ends_with(FAREWELL));
    assert_eq!(summary.turns, 1);
    assert!(!summary.exited_by_token);
}

#[test]
fn exit_token_is_case_insensitive() {
    let responder = Responder::default();
    let (_, summary) = run_session(&responder, "  QUIT  \n今天下雨\n", false);
    assert_eq!(summary.turns, 0);
    assert!(summary.exited_by_token);
}

#[test]
fn json_mode_emits_structured_replies() {
    let responder = Responder::new(Arc::new(FixedPicker(0)));
    let (output, _) = run_session(&responder, "我失眠又疲倦，而且很緊張\n結束\n", true);

    let line = output
        .lines()
        .map(|line| line.trim_start_matches("> "))
        .find(|line| line.starts_with('{'))
        .expect("json reply line");
    let value: serde_json::Value = serde_json::from_str(line).unwrap();

    assert_eq!(value["route"], "screening");
    assert_eq!(value["severity"], "urgent");
    assert_eq!(value["issues"].as_array().map(Vec::len), Some(2));
}

#[test]
fn taiwan_session_thanks_encouragement() {
    let responder = Responder::new(Arc::new(FixedPicker(0)));
    let (output, _) = run_session(&responder, "一起加油\n再見\n", false);
    assert!(output.contains("Ash 說：謝謝你的鼓勵！我們會繼續努力。"));
}

#[test]
fn screening_wins_over_every_phrase_route() {
    let responder = Responder::default();
    let reply = responder.respond("分手以後我一直失眠，看到貓也不開心，沒有目標");

    assert_eq!(reply.route, Route::Screening);
    assert_eq!(reply.severity, Some(SeverityLevel::Evaluate));
    assert!(reply.text.contains("建議尋求專業評估"));
    assert!(reply.text.contains("專業的心理健康專家"));
}

#[test]
fn cat_replies_stay_in_cat_table_under_randomness() {
    let responder = Responder::new(Arc::new(SeededPicker::new(2024)));
    for _ in 0..50 {
        let text = responder.process("好可愛的小貓");
        assert!(CAT_REPLIES.replies.contains(&text.as_str()));
    }
}

#[test]
fn responder_is_shareable_across_threads() {
    let responder = Arc::new(build_responder(&AppConfig::default()));

    let handles = (0..4)
        .map(|_| {
            let responder = Arc::clone(&responder);
            thread::spawn(move || responder.respond("我們分手了").text)
        })
        .collect::<Vec<_>>();

    for handle in handles {
        let text = handle.join().expect("worker thread");
        assert!(BREAKUP_COMFORT_REPLIES.replies.contains(&text.as_str()));
    }
}

#[test]
fn cbt_entry_point_matches_exact_names_only() {
    let responder = Responder::default();

    assert_eq!(
        responder.start_cbt("情緒調節"),
        "好的，我們開始進行 情緒調節。\n1. 辨識你的情緒\n2. 了解情緒的起因\n3. 學習健康的應對方式"
    );
    assert_eq!(responder.start_cbt("情緒"), "抱歉，目前沒有這個 CBT 模組。");
    assert_eq!(responder.start_cbt("不存在模組"), "抱歉，目前沒有這個 CBT 模組。");
}
