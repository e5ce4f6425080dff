use crate::intent::count_matches;
use crate::models::{IssueHit, Screening, SeverityLevel};
use crate::tables::KeywordCategory;

const SCREENING_OPENER: &str = "我注意到你提到了一些不適的感覺。";
const REFERRAL_SUGGESTION: &str = " 為了更了解你的情況，強烈建議你諮詢專業的心理健康專家。";
const SELF_CARE_SUGGESTION: &str = " 試著和朋友或家人聊聊，或者做一些讓你放鬆的事情。";

/// Counts trigger phrases per category. Returns `None` when no category is hit.
///
/// Phrases are counted independently, so overlapping phrases in the same
/// category each add to the count.
pub fn screen(text: &str, categories: &[KeywordCategory]) -> Option<Screening> {
    let hits = categories
        .iter()
        .filter_map(|category| {
            let count = count_matches(text, category.triggers);
            (count > 0).then_some(IssueHit {
                label: category.label,
                count,
            })
        })
        .collect::<Vec<_>>();

    if hits.is_empty() {
        return None;
    }

    let score = hits.iter().map(|hit| hit.count).sum();
    Some(Screening {
        hits,
        score,
        level: SeverityLevel::from_score(score),
    })
}

pub fn compose_screening_reply(screening: &Screening) -> String {
    let mut reply = String::from(SCREENING_OPENER);

    for hit in &screening.hits {
        reply.push_str(&format!(
            " 你提到了 {} 相關的詞語 {} 次。",
            hit.label, hit.count
        ));
    }

    reply.push_str(&format!(
        " 根據你的描述，我初步判斷你的情況可能屬於 {}。",
        screening.level.description()
    ));

    if screening.level >= SeverityLevel::Evaluate {
        reply.push_str(REFERRAL_SUGGESTION);
    } else {
        reply.push_str(SELF_CARE_SUGGESTION);
    }

    reply
}
