//! Derived Display Data
//!
//! Pure helpers recomputed on every render: status aggregation, map
//! filtering and chart normalization. All of them are total over their
//! inputs; empty lists and all-zero datasets have defined results.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{ChartDatum, Complaint, DomainResult, IssueStatus, MapMarker, MarkerType, Priority};

/// Number of complaints in each status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCounts {
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl StatusCounts {
    pub fn get(&self, status: IssueStatus) -> usize {
        match status {
            IssueStatus::Open => self.open,
            IssueStatus::InProgress => self.in_progress,
            IssueStatus::Resolved => self.resolved,
        }
    }

    pub fn total(&self) -> usize {
        self.open + self.in_progress + self.resolved
    }
}

pub fn count_by_status(complaints: &[Complaint]) -> StatusCounts {
    complaints.iter().fold(StatusCounts::default(), |mut counts, complaint| {
        match complaint.status {
            IssueStatus::Open => counts.open += 1,
            IssueStatus::InProgress => counts.in_progress += 1,
            IssueStatus::Resolved => counts.resolved += 1,
        }
        counts
    })
}

/// Number of markers at each priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriorityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub urgent: usize,
}

impl PriorityCounts {
    pub fn get(&self, priority: Priority) -> usize {
        match priority {
            Priority::Low => self.low,
            Priority::Medium => self.medium,
            Priority::High => self.high,
            Priority::Urgent => self.urgent,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high + self.urgent
    }
}

pub fn count_by_priority(markers: &[MapMarker]) -> PriorityCounts {
    markers.iter().fold(PriorityCounts::default(), |mut counts, marker| {
        match marker.priority {
            Priority::Low => counts.low += 1,
            Priority::Medium => counts.medium += 1,
            Priority::High => counts.high += 1,
            Priority::Urgent => counts.urgent += 1,
        }
        counts
    })
}

/// Map filter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(MarkerType),
}

impl CategoryFilter {
    pub const ALL_ID: &'static str = "all";

    /// Select value
    pub fn id(&self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_ID,
            CategoryFilter::Only(kind) => kind.id(),
        }
    }

    /// Lenient parse for the select element: unknown values show everything
    pub fn from_select(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    pub fn matches(&self, marker: &MapMarker) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(kind) => marker.kind == *kind,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = crate::domain::DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        if s == Self::ALL_ID {
            Ok(CategoryFilter::All)
        } else {
            s.parse::<MarkerType>().map(CategoryFilter::Only)
        }
    }
}

/// Markers matching `filter`, in their original order
pub fn filter_by_category(markers: &[MapMarker], filter: CategoryFilter) -> Vec<&MapMarker> {
    markers.iter().filter(|m| filter.matches(m)).collect()
}

/// Whole-number share of the total for each datum.
///
/// Each element is rounded on its own, so the shares sum to 100 only within
/// one point per element. A dataset whose sum is not positive yields zeros.
pub fn percentages(data: &[ChartDatum]) -> Vec<u32> {
    let total: f64 = data.iter().map(|d| d.value).sum();
    if total <= 0.0 || !total.is_finite() {
        return vec![0; data.len()];
    }
    data.iter()
        .map(|d| (d.value / total * 100.0).round().max(0.0) as u32)
        .collect()
}

/// Bar width in percent of the largest value; zeros when no value is positive
pub fn bar_widths(data: &[ChartDatum]) -> Vec<f64> {
    let max = data.iter().map(|d| d.value).fold(0.0_f64, f64::max);
    if max <= 0.0 || !max.is_finite() {
        return vec![0.0; data.len()];
    }
    data.iter()
        .map(|d| (d.value / max * 100.0).clamp(0.0, 100.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Tone;
    use crate::sample;

    fn datum(name: &str, value: f64) -> ChartDatum {
        ChartDatum::new(name, value, Tone::Blue)
    }

    #[test]
    fn test_count_by_status_sums_to_len() {
        let complaints = sample::complaints();
        let counts = count_by_status(&complaints);
        assert_eq!(counts.total(), complaints.len());
        assert_eq!(counts.get(IssueStatus::Open), 1);
        assert_eq!(counts.get(IssueStatus::InProgress), 1);
        assert_eq!(counts.get(IssueStatus::Resolved), 1);
    }

    #[test]
    fn test_count_by_status_uneven_mix() {
        let statuses = [
            IssueStatus::Open,
            IssueStatus::Resolved,
            IssueStatus::Open,
            IssueStatus::InProgress,
            IssueStatus::Resolved,
            IssueStatus::Resolved,
            IssueStatus::Open,
            IssueStatus::Resolved,
            IssueStatus::InProgress,
            IssueStatus::Resolved,
        ];
        let template = sample::complaints().remove(0);
        let complaints: Vec<_> = statuses
            .iter()
            .enumerate()
            .map(|(i, &status)| {
                let mut complaint = template.clone();
                complaint.id = format!("C-{}", i);
                complaint.status = status;
                complaint
            })
            .collect();

        let counts = count_by_status(&complaints);
        assert_eq!(counts.open, 3);
        assert_eq!(counts.in_progress, 2);
        assert_eq!(counts.resolved, 5);
        assert_eq!(counts.total(), complaints.len());

        let only_resolved: Vec<_> = complaints.iter().filter(|c| c.status == IssueStatus::Resolved).cloned().collect();
        let counts = count_by_status(&only_resolved);
        assert_eq!((counts.open, counts.in_progress, counts.resolved), (0, 0, 5));
    }

    #[test]
    fn test_count_by_status_empty() {
        let counts = count_by_status(&[]);
        for status in IssueStatus::ALL {
            assert_eq!(counts.get(status), 0);
        }
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_count_by_priority() {
        let counts = count_by_priority(&sample::map_markers());
        assert_eq!(counts.high, 2);
        assert_eq!(counts.medium, 2);
        assert_eq!(counts.low, 1);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn test_filter_keeps_order() {
        let markers = sample::map_markers();
        let roads = filter_by_category(&markers, CategoryFilter::Only(MarkerType::Road));
        let ids: Vec<u32> = roads.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert!(roads.iter().all(|m| m.kind == MarkerType::Road));
    }

    #[test]
    fn test_filter_all_returns_everything() {
        let markers = sample::map_markers();
        let all = filter_by_category(&markers, CategoryFilter::All);
        assert_eq!(all.len(), markers.len());
        for (filtered, original) in all.iter().zip(markers.iter()) {
            assert_eq!(*filtered, original);
        }
    }

    #[test]
    fn test_filter_absent_category_is_empty() {
        let markers = sample::map_markers();
        assert!(filter_by_category(&markers, CategoryFilter::Only(MarkerType::Police)).is_empty());
        assert!(filter_by_category(&[], CategoryFilter::All).is_empty());
    }

    #[test]
    fn test_filter_select_values() {
        assert_eq!(CategoryFilter::from_select("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_select("water"), CategoryFilter::Only(MarkerType::Water));
        assert_eq!(CategoryFilter::from_select("bogus"), CategoryFilter::All);
        assert_eq!(CategoryFilter::Only(MarkerType::Lighting).id(), "lighting");
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let datasets = vec![
            sample::priority_distribution(),
            sample::lighting_performance(),
            sample::road_conditions(),
            sample::water_system_status(),
            sample::user_roles(),
            vec![datum("a", 1.0), datum("b", 1.0), datum("c", 1.0)],
        ];
        for data in datasets {
            let shares = percentages(&data);
            let sum: i64 = shares.iter().map(|&s| s as i64).sum();
            assert!((sum - 100).abs() <= data.len() as i64, "sum {} for {:?}", sum, data);
        }
    }

    #[test]
    fn test_percentages_known_values() {
        let shares = percentages(&sample::priority_distribution());
        // 23 / 45 / 78 of 146
        assert_eq!(shares, vec![16, 31, 53]);
    }

    #[test]
    fn test_percentages_all_zero() {
        let data = vec![datum("a", 0.0), datum("b", 0.0)];
        assert_eq!(percentages(&data), vec![0, 0]);
        assert!(percentages(&[]).is_empty());
    }

    #[test]
    fn test_bar_widths() {
        let data = vec![datum("Jan", 45.0), datum("Feb", 90.0), datum("Mar", 0.0)];
        assert_eq!(bar_widths(&data), vec![50.0, 100.0, 0.0]);
    }

    #[test]
    fn test_bar_widths_all_zero() {
        let data = vec![datum("a", 0.0), datum("b", 0.0)];
        assert_eq!(bar_widths(&data), vec![0.0, 0.0]);
        assert!(bar_widths(&[]).is_empty());
    }
}
