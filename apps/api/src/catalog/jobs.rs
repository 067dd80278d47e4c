use tracing::debug;

use crate::models::catalog::{Job, WorkMode, WorkModeFilter};
use crate::models::domain::Domain;

pub const DEFAULT_JOB_LIMIT: usize = 6;

struct JobListing {
    title: &'static str,
    company: &'static str,
    location: &'static str,
    work_mode: WorkMode,
    salary: u32,
}

const JOB_LISTINGS: &[JobListing] = &[
    JobListing {
        title: "Senior Frontend Developer",
        company: "TechCorp Inc.",
        location: "San Francisco, CA",
        work_mode: WorkMode::Remote,
        salary: 8500,
    },
    JobListing {
        title: "Full Stack Developer",
        company: "InnovateTech",
        location: "New York, NY",
        work_mode: WorkMode::Hybrid,
        salary: 7200,
    },
    JobListing {
        title: "React Developer",
        company: "WebSolutions",
        location: "Austin, TX",
        work_mode: WorkMode::OnSite,
        salary: 6800,
    },
    JobListing {
        title: "JavaScript Engineer",
        company: "CodeMasters",
        location: "Seattle, WA",
        work_mode: WorkMode::Remote,
        salary: 7500,
    },
    JobListing {
        title: "Frontend Architect",
        company: "DesignHub",
        location: "Boston, MA",
        work_mode: WorkMode::Hybrid,
        salary: 9200,
    },
    JobListing {
        title: "UI Developer",
        company: "CreativeMinds",
        location: "Chicago, IL",
        work_mode: WorkMode::OnSite,
        salary: 5800,
    },
    JobListing {
        title: "Senior React Developer",
        company: "AppWorks",
        location: "Denver, CO",
        work_mode: WorkMode::Remote,
        salary: 8000,
    },
    JobListing {
        title: "Frontend Team Lead",
        company: "TechInnovate",
        location: "Portland, OR",
        work_mode: WorkMode::Hybrid,
        salary: 9500,
    },
];

impl JobListing {
    fn to_job(&self) -> Job {
        Job {
            title: self.title.to_string(),
            company: self.company.to_string(),
            location: self.location.to_string(),
            url: "#".to_string(),
            work_mode: self.work_mode,
            salary: self.salary,
        }
    }
}

/// Jobs matching the work-mode filter with `salary >= min_salary`, in catalog order.
pub fn get_jobs(domain: Domain, work_mode: WorkModeFilter, min_salary: u32, limit: usize) -> Vec<Job> {
    debug!("Job recommendations for {domain}: {work_mode:?}, min salary {min_salary}, limit {limit}");

    JOB_LISTINGS
        .iter()
        .filter(|j| work_mode.accepts(j.work_mode))
        .filter(|j| j.salary >= min_salary)
        .take(limit)
        .map(JobListing::to_job)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_eight_listings() {
        let all = get_jobs(Domain::WebDevelopment, WorkModeFilter::All, 0, usize::MAX);
        assert_eq!(all.len(), 8);
    }

    #[test]
    fn test_remote_with_salary_floor() {
        let jobs = get_jobs(
            Domain::WebDevelopment,
            WorkModeFilter::Only(WorkMode::Remote),
            8000,
            6,
        );
        let titles: Vec<&str> = jobs.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["Senior Frontend Developer", "Senior React Developer"]);
        assert!(jobs
            .iter()
            .all(|j| j.work_mode == WorkMode::Remote && j.salary >= 8000));
    }

    #[test]
    fn test_limit_truncates() {
        let jobs = get_jobs(Domain::WebDevelopment, WorkModeFilter::All, 0, 3);
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[0].title, "Senior Frontend Developer");

        assert!(get_jobs(Domain::WebDevelopment, WorkModeFilter::All, 0, 0).is_empty());
    }

    #[test]
    fn test_salary_floor_above_catalog_is_empty() {
        assert!(get_jobs(Domain::DevOps, WorkModeFilter::All, 10_000, 6).is_empty());
    }
}
