/// Sample project catalog
///
/// The six showcase projects displayed when the live gallery is empty or the
/// store cannot be reached, and the seeding routine that writes them into an
/// empty store.

use crate::store::{NewProject, PortfolioStore, Project, StoreResult};
use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

const IMAGE_PARAMS: &str = "ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600";

/// (title, description, unsplash photo id, tags)
const SAMPLES: [(&str, &str, &str, [&str; 2]); 6] = [
    (
        "E-commerce Platform",
        "Modern shopping experience with intuitive navigation and seamless checkout flow.",
        "photo-1559028006-448665bd7c7f",
        ["UI/UX", "Branding"],
    ),
    (
        "Mobile Banking App",
        "Secure and user-friendly banking solution with advanced financial tracking.",
        "photo-1586717791821-3f44a563fa4c",
        ["Mobile", "Fintech"],
    ),
    (
        "Brand Identity",
        "Complete rebrand for tech startup including logo, guidelines, and digital assets.",
        "photo-1626785774573-4b799315345d",
        ["Branding", "Strategy"],
    ),
    (
        "SaaS Dashboard",
        "Analytics platform with complex data visualization and real-time insights.",
        "photo-1558655146-d09347e92766",
        ["Dashboard", "Analytics"],
    ),
    (
        "Learning Platform",
        "Interactive educational experience with gamification and progress tracking.",
        "photo-1542744095-fcf48d80b0fd",
        ["EdTech", "UX Research"],
    ),
    (
        "Creative Portfolio",
        "Personal portfolio website with interactive animations and smooth transitions.",
        "photo-1513475382585-d06e58bcb0e0",
        ["Portfolio", "Animation"],
    ),
];

/// Sample projects in display order, ready to be written to a store
pub fn sample_projects() -> Vec<NewProject> {
    SAMPLES
        .iter()
        .map(|(title, description, photo, tags)| NewProject {
            title: title.to_string(),
            description: description.to_string(),
            image_url: Some(format!("https://images.unsplash.com/{}?{}", photo, IMAGE_PARAMS)),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            project_url: None,
        })
        .collect()
}

/// Sample projects as display records, numbered 1 through 6 and stamped
/// with `catalog_date()`
pub fn fallback_projects() -> Vec<Project> {
    let created_at = catalog_date();
    sample_projects()
        .into_iter()
        .zip(1..)
        .map(|(project, id)| project.into_project(id, created_at))
        .collect()
}

/// Fixed publication date of the sample catalog
pub fn catalog_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Where a showcase listing came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowcaseSource {
    Live,
    Fallback,
}

/// Projects to display on the gallery page
#[derive(Debug, Clone, Serialize)]
pub struct Showcase {
    pub source: ShowcaseSource,
    pub projects: Vec<Project>,
}

/// Resolve the gallery listing: live projects when there are any, the sample
/// catalog when the store is empty or unreachable.
pub async fn showcase(store: &dyn PortfolioStore) -> Showcase {
    match store.list_projects().await {
        Ok(projects) if !projects.is_empty() => Showcase {
            source: ShowcaseSource::Live,
            projects,
        },
        Ok(_) => {
            tracing::debug!("No projects stored, showing sample catalog");
            Showcase {
                source: ShowcaseSource::Fallback,
                projects: fallback_projects(),
            }
        }
        Err(e) => {
            tracing::warn!("⚠️ Project store unavailable, showing sample catalog: {}", e);
            Showcase {
                source: ShowcaseSource::Fallback,
                projects: fallback_projects(),
            }
        }
    }
}

/// Write the sample catalog into the store if it holds no projects yet.
///
/// Returns the number of projects inserted (0 when the store was not empty).
pub async fn seed_if_empty(store: &dyn PortfolioStore) -> StoreResult<usize> {
    if store.count_projects().await? > 0 {
        tracing::debug!("Project store already populated, skipping sample seed");
        return Ok(0);
    }

    let samples = sample_projects();
    let count = samples.len();
    for project in samples {
        store.create_project(project).await?;
    }

    tracing::info!("🌱 Seeded {} sample projects", count);
    Ok(count)
}
