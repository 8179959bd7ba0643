//! Demo content bundled with the application.

use chrono::NaiveDate;

use crate::domain::comment::EventComment;
use crate::domain::course::{Course, CourseKind, Subject};
use crate::domain::post::{BoardType, Post};
use crate::domain::types::{CommentId, CourseId, PostId};
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub const EVENT_COMMENT_COUNT: usize = 50;

const PLEDGES: [&str; 5] = [
    "올해는 꼭 합격해서 부모님께 효도하고 싶어요! 에듀윌과 함께라면 가능할 것 같습니다.",
    "직장인 수험생입니다. 퇴근 후 공부가 힘들지만, 환급반 덕분에 동기부여 제대로 됩니다. 화이팅!",
    "교수님 강의가 너무 재미있어서 시간가는 줄 모르고 듣고 있습니다. 이번 시험 무조건 합격!",
    "재수생입니다. 작년엔 아깝게 떨어졌지만 올해는 에듀윌로 확실하게 끝내겠습니다.",
    "육아맘 도전합니다. 아이에게 자랑스러운 엄마가 되고 싶어요.",
];

const DEFAULT_THUMBNAIL: &str = "//img.eduwill.net/Img2/teacherPage/imgTemp/20240226171602087.jpg";

fn date(year: i32, month: u32, day: u32) -> RepositoryResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        RepositoryError::Unexpected(format!("invalid seed date {year}-{month}-{day}"))
    })
}

fn post(
    id: i32,
    board: BoardType,
    title: &str,
    content: &str,
    author: &str,
    posted_at: NaiveDate,
    views: u32,
) -> RepositoryResult<Post> {
    Ok(Post::new(
        PostId::new(id)?,
        board,
        title,
        content,
        author,
        posted_at,
        views,
    ))
}

/// Notices, reviews and exam info posts in board display order.
pub fn community_posts() -> RepositoryResult<Vec<Post>> {
    use BoardType::{Info, Notice, Review};

    Ok(vec![
        post(
            1,
            Notice,
            "[필독] 2026년 공인중개사 시험 일정 및 접수 안내",
            "<p>안녕하세요. 에듀윌입니다.</p>\
             <p>2026년 제37회 공인중개사 자격시험 일정이 발표되었습니다.</p><br/>\
             <p><strong>1. 시험 일정</strong></p>\
             <p>- 1차 접수: 2026.08.10 ~ 2026.08.14</p>\
             <p>- 시험일: 2026.10.31 (토)</p><br/>\
             <p>수험생 여러분의 합격을 응원합니다.</p>",
            "에듀윌",
            date(2026, 2, 1)?,
            12500,
        )?
        .important(),
        post(
            2,
            Notice,
            "[긴급] 서버 점검 안내 (02/10 02:00 ~ 04:00)",
            "서버 안정화를 위한 정기 점검이 진행될 예정입니다.",
            "운영자",
            date(2026, 2, 8)?,
            3400,
        )?
        .important(),
        post(
            3,
            Notice,
            "3월 민법 심화강의 교재 정오표 안내",
            "35페이지 12번째 줄 오타 수정 사항입니다.",
            "민법교수진",
            date(2026, 2, 5)?,
            856,
        )?
        .subject("민법"),
        post(
            4,
            Notice,
            "부동산학개론 계산문제 특강 자료 업로드",
            "첨부파일을 확인해주세요.",
            "이영방 교수팀",
            date(2026, 2, 3)?,
            1102,
        )?
        .subject("학개론"),
        post(
            11,
            Review,
            "직장인 6개월 동차 합격 수기 (공부법 공유)",
            "퇴근 후 하루 4시간씩 꾸준히 공부했습니다. 에듀윌 커리큘럼만 따라가면 됩니다!",
            "박*수",
            date(2026, 1, 20)?,
            5420,
        )?
        .subject("전체")
        .rating(5)
        .passer()
        .photos([
            "https://img.eduwill.net/eduwill/img/2021/L/common/210218/thumb_interview17.png",
        ]),
        post(
            12,
            Review,
            "심정욱 교수님 강의 듣고 민법 85점 받았습니다!",
            "판례 설명이 너무 명쾌해서 이해하기 쉬웠어요.",
            "김*영",
            date(2026, 2, 2)?,
            1200,
        )?
        .subject("민법")
        .rating(5)
        .passer(),
        post(
            13,
            Review,
            "공포의 공법, 체계도로 극복했습니다.",
            "체계도 특강이 신의 한 수였습니다.",
            "이*민",
            date(2026, 1, 28)?,
            2300,
        )?
        .subject("공법")
        .rating(4)
        .photos([
            "https://img.eduwill.net/eduwill/img/2021/L/common/210218/thumb_interview19.png",
        ]),
        post(
            14,
            Review,
            "계산문제 포기하지 마세요.",
            "공식만 외우면 풀 수 있는 문제가 많습니다.",
            "최*진",
            date(2026, 2, 6)?,
            800,
        )?
        .subject("학개론")
        .rating(5),
        post(
            21,
            Info,
            "제36회 공인중개사 기출문제 모음집 (PDF)",
            "작년 기출문제와 해설집입니다.",
            "에듀윌",
            date(2025, 12, 1)?,
            15600,
        )?
        .attachment(),
        post(
            22,
            Info,
            "2026 시험 대비 필수 암기장 배포",
            "핸드북 사이즈로 제작된 암기장입니다.",
            "학습지원센터",
            date(2026, 1, 15)?,
            8900,
        )?
        .d_day("D-265")
        .attachment(),
        post(
            23,
            Info,
            "자격증 발급 절차 및 주의사항 안내",
            "합격자 발표 후 자격증 신청 방법입니다.",
            "자격증팀",
            date(2025, 11, 30)?,
            3200,
        )?,
    ])
}

struct CourseSeed<'a> {
    id: &'a str,
    kind: CourseKind,
    subject: Option<Subject>,
    title: &'a str,
    instructor: &'a str,
    thumbnail: &'a str,
    original_price: u32,
    price: u32,
    tags: &'a [&'a str],
    best_seller: bool,
    rating: f32,
    review_count: u32,
    benefits: &'a [&'a str],
    lectures: Option<u32>,
    duration: Option<&'a str>,
}

impl TryFrom<CourseSeed<'_>> for Course {
    type Error = RepositoryError;

    fn try_from(seed: CourseSeed<'_>) -> Result<Self, Self::Error> {
        Ok(Course {
            id: CourseId::new(seed.id)?,
            kind: seed.kind,
            subject: seed.subject,
            title: seed.title.to_string(),
            instructor: seed.instructor.to_string(),
            thumbnail: seed.thumbnail.to_string(),
            original_price: seed.original_price,
            price: seed.price,
            tags: seed.tags.iter().map(ToString::to_string).collect(),
            best_seller: seed.best_seller,
            rating: seed.rating,
            review_count: seed.review_count,
            benefits: seed.benefits.iter().map(ToString::to_string).collect(),
            lectures: seed.lectures,
            duration: seed.duration.map(str::to_string),
        })
    }
}

/// Package and single courses offered in the registration catalog.
pub fn courses() -> RepositoryResult<Vec<Course>> {
    use CourseKind::{Package, Single};

    let seeds = [
        CourseSeed {
            id: "p1",
            kind: Package,
            subject: None,
            title: "2026 공인중개사 1차+2차 평생패스 [환급형]",
            instructor: "이영방 외 20명",
            thumbnail: DEFAULT_THUMBNAIL,
            original_price: 1_200_000,
            price: 890_000,
            tags: &["평생수강", "수강료환급", "베스트셀러"],
            best_seller: true,
            rating: 4.9,
            review_count: 3240,
            benefits: &["교재 16권 포함", "IT 실무강의 무료", "1:1 밀착관리"],
            lectures: None,
            duration: None,
        },
        CourseSeed {
            id: "p2",
            kind: Package,
            subject: None,
            title: "2026 주택관리사 1차 단기합격반",
            instructor: "윤난 외 8명",
            thumbnail: "//img.eduwill.net/Img2/teacherPage/imgTemp/20230530142433166.png",
            original_price: 600_000,
            price: 350_000,
            tags: &["단기완성", "핵심요약"],
            best_seller: false,
            rating: 4.8,
            review_count: 850,
            benefits: &["핵심요약집 제공", "모의고사 무료"],
            lectures: None,
            duration: None,
        },
        CourseSeed {
            id: "s1",
            kind: Single,
            subject: Some(Subject::Intro),
            title: "부동산학개론 기초이론",
            instructor: "이영방 교수",
            thumbnail: DEFAULT_THUMBNAIL,
            original_price: 150_000,
            price: 50_000,
            tags: &["입문자용", "기초탄탄"],
            best_seller: true,
            rating: 5.0,
            review_count: 120,
            benefits: &[],
            lectures: Some(24),
            duration: Some("20시간"),
        },
        CourseSeed {
            id: "s2",
            kind: Single,
            subject: Some(Subject::Civil),
            title: "민법 및 민사특별법 기본이론",
            instructor: "심정욱 교수",
            thumbnail: "//img.eduwill.net/Img2/teacherPage/imgTemp/20240226175127618.jpg",
            original_price: 180_000,
            price: 60_000,
            tags: &["필수과목", "판례중심"],
            best_seller: false,
            rating: 4.9,
            review_count: 95,
            benefits: &[],
            lectures: Some(30),
            duration: Some("25시간"),
        },
        CourseSeed {
            id: "s3",
            kind: Single,
            subject: Some(Subject::Public),
            title: "부동산 공법 심화이론",
            instructor: "김희상 교수",
            thumbnail: DEFAULT_THUMBNAIL,
            original_price: 200_000,
            price: 70_000,
            tags: &["고득점", "체계도"],
            best_seller: false,
            rating: 4.8,
            review_count: 78,
            benefits: &[],
            lectures: Some(28),
            duration: Some("22시간"),
        },
        CourseSeed {
            id: "s4",
            kind: Single,
            subject: Some(Subject::Property),
            title: "부동산공시법 핵심요약",
            instructor: "김민석 교수",
            thumbnail: DEFAULT_THUMBNAIL,
            original_price: 160_000,
            price: 55_000,
            tags: &["핵심정리", "단기완성"],
            best_seller: false,
            rating: 4.7,
            review_count: 45,
            benefits: &[],
            lectures: Some(20),
            duration: Some("18시간"),
        },
        CourseSeed {
            id: "s5",
            kind: Single,
            subject: Some(Subject::Tax),
            title: "부동산세법 문제풀이",
            instructor: "한영규 교수",
            thumbnail: DEFAULT_THUMBNAIL,
            original_price: 170_000,
            price: 60_000,
            tags: &["문제풀이", "실전대비"],
            best_seller: false,
            rating: 4.8,
            review_count: 60,
            benefits: &[],
            lectures: Some(25),
            duration: Some("22시간"),
        },
    ];

    seeds.into_iter().map(Course::try_from).collect()
}

/// Deterministic pledge comments for the event page.
///
/// Handles and dates are derived from the index so every run renders the
/// same list.
pub fn event_comments(count: usize) -> RepositoryResult<Vec<EventComment>> {
    (0..count)
        .map(|i| {
            let id = i32::try_from(i + 1)
                .map_err(|err| RepositoryError::Unexpected(err.to_string()))?;
            let day = u32::try_from((i * 7) % 28 + 1)
                .map_err(|err| RepositoryError::Unexpected(err.to_string()))?;

            Ok(EventComment {
                id: CommentId::new(id)?,
                user: format!("eduw***{}", (i * 37 + 11) % 100),
                content: PLEDGES[i % PLEDGES.len()].to_string(),
                date: date(2026, 2, day)?,
            })
        })
        .collect()
}
