//! Score bands and their fixed recommendations.
//!
//! Three contiguous bands cover every integer total:
//!
//! | Band | Range |
//! |------|-------|
//! | `NeedsImprovement` | `..=30` |
//! | `Fair` | `31..=65` |
//! | `Good` | `66..` |

use serde::Serialize;

const FAIR_MIN: i64 = 31;
const GOOD_MIN: i64 = 66;

/// One of the three interpretation bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    NeedsImprovement,
    Fair,
    Good,
}

impl Band {
    /// Selects the band for a total score.
    pub fn for_score(total: i64) -> Self {
        if total < FAIR_MIN {
            Band::NeedsImprovement
        } else if total < GOOD_MIN {
            Band::Fair
        } else {
            Band::Good
        }
    }

    /// Inclusive bounds of the band; `None` means unbounded on that side.
    pub fn range(&self) -> (Option<i64>, Option<i64>) {
        match self {
            Band::NeedsImprovement => (None, Some(FAIR_MIN - 1)),
            Band::Fair => (Some(FAIR_MIN), Some(GOOD_MIN - 1)),
            Band::Good => (Some(GOOD_MIN), None),
        }
    }

    pub fn title(&self) -> &'static str {
        self.recommendation().title
    }

    pub fn recommendation(&self) -> &'static Recommendation {
        match self {
            Band::NeedsImprovement => &NEEDS_IMPROVEMENT,
            Band::Fair => &FAIR,
            Band::Good => &GOOD,
        }
    }
}

/// Fixed text block shown for a band.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub headline: &'static str,
    pub sections: &'static [RecommendationSection],
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct RecommendationSection {
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

static NEEDS_IMPROVEMENT: Recommendation = Recommendation {
    title: "~ 30점: 개선이 시급한 상태",
    headline: "장내 미생물 다양성 및 유익균 비율이 매우 낮을 가능성",
    sections: &[
        RecommendationSection {
            heading: "🔍 개선 방안:",
            items: &[
                "기본적인 식이섬유 섭취 습관을 형성하는 것이 우선",
                "유산균만 섭취하지 말고, 프리바이오틱스(식이섬유)가 풍부한 식품부터 습관화하시길 추천합니다!",
            ],
        },
        RecommendationSection {
            heading: "✅ 식단 제안:",
            items: &[
                "매일 채소 반찬 2가지 이상 섭취 (예: 배추김치, 나물류)",
                "미역국/다시마국 등 해조류 섭취 주 3회 이상",
                "아침에 귀리, 오트밀 혹은 보리밥 시도",
                "콩나물국, 두부, 된장국으로 콩류 섭취 확대",
            ],
        },
    ],
};

static FAIR: Recommendation = Recommendation {
    title: "31~ 65점: 일정 부분 양호하지만, 개선 여지 있음",
    headline: "기본적인 유익균 환경은 있지만 다양성과 안정성은 부족할 수 있음",
    sections: &[
        RecommendationSection {
            heading: "🔍 개선 방안:",
            items: &[
                "다양한 식이섬유 종류를 고르게 섭취해야 합니다.",
                "특정 식품군(예: 해조류, 곡물)에 치우치지 않도록 주의하세요!",
            ],
        },
        RecommendationSection {
            heading: "✅ 식단 제안:",
            items: &[
                "잡곡밥, 귀리, 오트밀을 번갈아 가며 섭취",
                "곤약 젤리나 곤약면 등으로 글루코만난 섭취 늘리기",
                "과일은 사과, 감귤 등 펙틴이 풍부한 과일을 포함",
                "주 2~3회 해조류 반찬 추가",
            ],
        },
    ],
};

static GOOD: Recommendation = Recommendation {
    title: "66 ~ 100점: 장내 환경이 양호한 상태",
    headline: "유익균 비율과 미생물 다양성이 양호하며 좋은 식습관 유지 중",
    sections: &[
        RecommendationSection {
            heading: "🔍 유지 방안:",
            items: &[
                "현재의 식단을 유지하면서 발효식품과 유산균 보조제 등을 추가해 장내 환경을 더욱 강화할 수 있습니다.",
                "스트레스 관리, 수면, 식사 시간 규칙성도 장내 미생물에 중요함.",
            ],
        },
        RecommendationSection {
            heading: "✅ 강화 방안:",
            items: &[
                "요구르트 + 귀리 같이 유산균 + 프리바이오틱스 조합 활용",
                "김치, 된장, 청국장 등 발효식품 주 2~3회 이상 섭취",
                "주말에 곤약 요리, 해조류 샐러드로 색다른 식이섬유 도전",
            ],
        },
    ],
};
