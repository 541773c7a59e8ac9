//! End-to-end walks through the session, intake and display layers.

use chrono::NaiveDate;

use civic_core::display::{count_by_status, filter_by_category, percentages, CategoryFilter};
use civic_core::domain::{prepend_complaint, ComplaintDraft, IssueCategory, IssueStatus, MarkerType, Priority};
use civic_core::pending::PendingRun;
use civic_core::report::GenerationState;
use civic_core::viewport::Viewport;
use civic_core::{sample, Credentials, Page, Session, SessionEvent, SessionPhase};

fn login(session: Session) -> Session {
    session
        .reduce(SessionEvent::ShowLogin)
        .reduce(SessionEvent::SubmitLogin(Credentials::new("a@b.com", "x")))
}

#[test]
fn test_login_navigate_logout() {
    let session = Session::new();
    assert_eq!(session.phase(), SessionPhase::Anonymous);

    let session = login(session);
    assert!(session.is_authenticated());
    assert_eq!(session.current_page(), Page::Dashboard);

    let session = session.reduce(SessionEvent::Navigate(Page::Map));
    assert_eq!(session.current_page(), Page::Map);

    let session = session.reduce(SessionEvent::Logout);
    assert_eq!(session.phase(), SessionPhase::Anonymous);

    let session = login(session);
    assert_eq!(session.current_page(), Page::Dashboard);
}

#[test]
fn test_unknown_deep_link_renders_dashboard() {
    let session = login(Session::new()).reduce(SessionEvent::Navigate(Page::from_hash("#/nonexistent")));
    assert_eq!(session.current_page(), Page::Dashboard);

    let session = session.reduce(SessionEvent::Navigate(Page::from_hash("#/water")));
    assert_eq!(session.current_page(), Page::Water);
}

#[test]
fn test_file_complaint_from_dashboard() {
    let mut complaints = sample::complaints();
    let before = count_by_status(&complaints);

    let draft = ComplaintDraft {
        title: "Pothole".to_string(),
        description: String::new(),
        category: IssueCategory::Road,
        priority: Priority::High,
        location: "Main St".to_string(),
    };
    let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    let complaint = draft.submit(1_706_745_600_000, today, "Current User").unwrap();
    prepend_complaint(&mut complaints, complaint);

    assert_eq!(complaints.len(), 4);
    assert_eq!(complaints[0].title, "Pothole");
    assert_eq!(complaints[0].status, IssueStatus::Open);

    let after = count_by_status(&complaints);
    assert_eq!(after.open, before.open + 1);
    assert_eq!(after.total(), complaints.len());
}

#[test]
fn test_incomplete_complaint_changes_nothing() {
    let mut complaints = sample::complaints();
    let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    let draft = ComplaintDraft {
        title: "Pothole".to_string(),
        ..ComplaintDraft::default()
    };
    if let Some(complaint) = draft.submit(1, today, "Current User") {
        prepend_complaint(&mut complaints, complaint);
    }
    assert_eq!(complaints, sample::complaints());
}

#[test]
fn test_map_filter_and_zoom() {
    let markers = sample::map_markers();
    let roads = filter_by_category(&markers, CategoryFilter::Only(MarkerType::Road));
    assert!(roads.iter().all(|m| m.kind == MarkerType::Road));
    assert_eq!(roads.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1, 4]);

    let mut viewport = Viewport::new();
    for _ in 0..20 {
        viewport.zoom_in();
    }
    assert_eq!(viewport.zoom_percent(), 300);
    viewport.reset();
    assert_eq!(viewport.zoom_percent(), 100);
    assert_eq!(viewport.pan(), (0.0, 0.0));
}

#[test]
fn test_chart_percentages_cover_every_dataset() {
    for data in [
        sample::category_distribution(),
        sample::priority_distribution(),
        sample::lighting_performance(),
        sample::road_conditions(),
        sample::water_system_status(),
        sample::user_roles(),
    ] {
        let sum: u32 = percentages(&data).iter().sum();
        assert!((99..=101).contains(&sum), "sum was {}", sum);
    }
}

#[test]
fn test_many_filed_complaints_keep_counts_whole() {
    let mut complaints = sample::complaints();
    let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    for n in 0..7u64 {
        let draft = ComplaintDraft {
            title: format!("Report {}", n),
            location: "Oak St".to_string(),
            ..ComplaintDraft::default()
        };
        if let Some(mut complaint) = draft.submit(1_706_745_600_000 + n, today, "Current User") {
            if n % 3 == 0 {
                complaint.status = IssueStatus::Resolved;
            }
            prepend_complaint(&mut complaints, complaint);
        }
    }

    let counts = count_by_status(&complaints);
    assert_eq!(complaints.len(), 10);
    assert_eq!(counts.total(), 10);
    assert_eq!(counts.open, 1 + 4);
    assert_eq!(counts.in_progress, 1);
    assert_eq!(counts.resolved, 1 + 3);
}

#[test]
fn test_leaving_report_page_abandons_generation() {
    let mut state = GenerationState::default();
    let ticket = state.begin().unwrap();

    // page torn down before the timer fires
    state.cancel();
    assert!(!state.finish(ticket));
    assert_eq!(state.button_label(), "Generate AI Report");

    let mut voice = PendingRun::default();
    let capture = voice.start().unwrap();
    voice.cancel();
    assert!(!voice.complete(capture));
}
