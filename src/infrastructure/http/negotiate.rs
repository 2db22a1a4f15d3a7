//! Content Negotiation
//!
//! 书籍详情页只提供 HTML 和 JSON 两种表示，按 `Accept` 头选择

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::ACCEPT, request::Parts},
};

use super::error::ApiError;

/// 可提供的表示，按优先顺序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Html,
    Json,
}

impl Representation {
    /// `*/*` 时选第一个
    const OFFERED: [Representation; 2] = [Representation::Html, Representation::Json];

    /// 匹配程度：精确 3，`type/*` 2，`*/*` 1，不匹配 None
    fn specificity(&self, media_type: &str) -> Option<u8> {
        let (kind, subtype) = match self {
            Representation::Html => ("text", "html"),
            Representation::Json => ("application", "json"),
        };

        match media_type.split_once('/') {
            Some(("*", "*")) => Some(1),
            Some((k, "*")) if k.eq_ignore_ascii_case(kind) => Some(2),
            Some((k, s)) if k.eq_ignore_ascii_case(kind) && s.eq_ignore_ascii_case(subtype) => {
                Some(3)
            }
            _ => None,
        }
    }
}

/// Accept 头中的一个媒体范围
#[derive(Debug, Clone, PartialEq)]
struct MediaRange<'a> {
    media_type: &'a str,
    quality: f32,
}

fn parse_accept(header: &str) -> Vec<MediaRange<'_>> {
    header
        .split(',')
        .filter_map(|part| {
            let mut params = part.split(';');
            let media_type = params.next()?.trim();
            if media_type.is_empty() {
                return None;
            }

            let quality = params
                .filter_map(|p| p.split_once('='))
                .filter(|(name, _)| name.trim().eq_ignore_ascii_case("q"))
                .find_map(|(_, q)| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);

            Some(MediaRange {
                media_type,
                quality,
            })
        })
        .collect()
}

/// 某个表示在 Accept 头中的得分
#[derive(Debug, Clone, Copy)]
struct Score {
    quality: f32,
    specificity: u8,
    position: usize,
}

impl Score {
    /// q 值高者优先，其次匹配更精确者，再次在头中更靠前者
    fn beats(&self, other: &Score) -> bool {
        self.quality
            .total_cmp(&other.quality)
            .then(self.specificity.cmp(&other.specificity))
            .then(other.position.cmp(&self.position))
            .is_gt()
    }
}

/// 取最精确的匹配范围，同样精确时取靠前者
fn score(rep: Representation, ranges: &[MediaRange<'_>]) -> Option<Score> {
    let mut best: Option<Score> = None;
    for (position, range) in ranges.iter().enumerate() {
        let Some(specificity) = rep.specificity(range.media_type) else {
            continue;
        };
        if best.map_or(true, |b| specificity > b.specificity) {
            best = Some(Score {
                quality: range.quality,
                specificity,
                position,
            });
        }
    }
    best
}

/// 根据 Accept 头选择表示
///
/// - 缺省或空的 Accept 视为 `*/*`
/// - 最精确匹配的 q=0 表示被拒绝
/// - 得分相同时按提供顺序（HTML 优先）
pub fn negotiate(accept: Option<&str>) -> Option<Representation> {
    let Some(accept) = accept.map(str::trim).filter(|s| !s.is_empty()) else {
        return Some(Representation::OFFERED[0]);
    };

    let ranges = parse_accept(accept);

    let mut chosen: Option<(Representation, Score)> = None;
    for rep in Representation::OFFERED {
        let Some(s) = score(rep, &ranges).filter(|s| s.quality > 0.0) else {
            continue;
        };
        if chosen.map_or(true, |(_, best)| s.beats(&best)) {
            chosen = Some((rep, s));
        }
    }

    chosen.map(|(rep, _)| rep)
}

/// 提取器：协商出的表示；无法满足时以 406 拒绝
#[derive(Debug, Clone, Copy)]
pub struct Negotiated(pub Representation);

#[async_trait]
impl<S> FromRequestParts<S> for Negotiated
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let accept = match parts.headers.get(ACCEPT) {
            Some(value) => Some(value.to_str().map_err(|_| ApiError::NotAcceptable)?),
            None => None,
        };
        negotiate(accept)
            .map(Negotiated)
            .ok_or(ApiError::NotAcceptable)
    }
}
