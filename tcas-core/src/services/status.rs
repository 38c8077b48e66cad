//! Status service - directory summary

use std::collections::BTreeMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::result::Result;
use crate::ports::PortfolioRepository;

/// Status service for directory summaries
pub struct StatusService {
    repository: Arc<dyn PortfolioRepository>,
}

impl StatusService {
    pub fn new(repository: Arc<dyn PortfolioRepository>) -> Self {
        Self { repository }
    }

    /// Get overall directory summary
    pub fn get_status(&self) -> Result<StatusSummary> {
        let records = self.repository.all()?;

        let gpa = if records.is_empty() {
            GpaSummary::default()
        } else {
            let total: Decimal = records.iter().map(|r| r.gpa).sum();
            GpaSummary {
                mean: Some((total / Decimal::from(records.len())).round_dp(2)),
                max: records.iter().map(|r| r.gpa).max(),
                min: records.iter().map(|r| r.gpa).min(),
            }
        };

        let mut by_major: BTreeMap<&str, usize> = BTreeMap::new();
        for record in &records {
            *by_major.entry(record.major.as_str()).or_default() += 1;
        }
        let mut majors: Vec<MajorCount> = by_major
            .into_iter()
            .map(|(major, count)| MajorCount {
                major: major.to_string(),
                count,
            })
            .collect();
        majors.sort_by(|a, b| b.count.cmp(&a.count));

        Ok(StatusSummary {
            total_portfolios: records.len(),
            total_with_photos: records.iter().filter(|r| r.has_photos()).count(),
            gpa,
            majors,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct StatusSummary {
    pub total_portfolios: usize,
    pub total_with_photos: usize,
    pub gpa: GpaSummary,
    /// Most popular first; ties by name
    pub majors: Vec<MajorCount>,
}

#[derive(Debug, Default, Serialize)]
pub struct GpaSummary {
    pub mean: Option<Decimal>,
    pub max: Option<Decimal>,
    pub min: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub struct MajorCount {
    pub major: String,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::demo::generate_demo_portfolios;
    use crate::adapters::memory::InMemoryRepository;

    #[test]
    fn test_empty_directory() {
        let service = StatusService::new(Arc::new(InMemoryRepository::new()));
        let status = service.get_status().unwrap();
        assert_eq!(status.total_portfolios, 0);
        assert!(status.gpa.mean.is_none());
        assert!(status.majors.is_empty());
    }

    #[test]
    fn test_demo_summary() {
        let repo = Arc::new(InMemoryRepository::new());
        for record in generate_demo_portfolios() {
            repo.insert(record).unwrap();
        }
        let status = StatusService::new(repo).get_status().unwrap();

        assert_eq!(status.total_portfolios, 5);
        assert_eq!(status.total_with_photos, 3);
        // (3.75 + 3.92 + 3.50 + 3.75 + 3.18) / 5 = 3.62
        assert_eq!(status.gpa.mean, Some(Decimal::new(362, 2)));
        assert_eq!(status.gpa.max, Some(Decimal::new(392, 2)));
        assert_eq!(status.gpa.min, Some(Decimal::new(318, 2)));
        assert_eq!(status.majors.len(), 5);
        assert_eq!(status.majors[0].major, "Architecture");
    }
}
