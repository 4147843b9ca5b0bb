use super::entities::{CaseStudy, ProcessStep, Project};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Demo dataset shown on first run and restored by `reset`.
pub fn default_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "Realtime Collaboration Board".to_string(),
            description: "A whiteboard where teams sketch, comment and vote on ideas together, \
                          with presence indicators and offline edits that merge on reconnect."
                .to_string(),
            technologies: strings(&["TypeScript", "React", "WebSockets", "PostgreSQL"]),
            repo_url: Some("https://github.com/example/collab-board".to_string()),
            live_url: Some("https://board.example.dev".to_string()),
            video_url: None,
            image: Some("/images/projects/collab-board.png".to_string()),
            icon: Some("layout".to_string()),
            screenshots: strings(&[
                "/images/projects/collab-board-1.png",
                "/images/projects/collab-board-2.png",
            ]),
            case_study: Some(CaseStudy {
                challenge: "Keep dozens of concurrent editors consistent over flaky networks."
                    .to_string(),
                solution: "Operation-based sync with server-assigned ordering and local replay."
                    .to_string(),
                results: "Median sync latency under 80ms and zero lost edits in beta.".to_string(),
                process: vec![
                    ProcessStep {
                        title: "Research".to_string(),
                        description: "Interviewed 12 product teams about their workshops."
                            .to_string(),
                    },
                    ProcessStep {
                        title: "Prototype".to_string(),
                        description: "Built a throwaway canvas to test the sync model."
                            .to_string(),
                    },
                    ProcessStep {
                        title: "Ship".to_string(),
                        description: "Rolled out behind a flag to three pilot teams.".to_string(),
                    },
                ],
                screenshots: strings(&["/images/projects/collab-board-case.png"]),
            }),
            featured: true,
        },
        Project {
            id: "2".to_string(),
            title: "Budget Tracker".to_string(),
            description: "Personal finance dashboard that categorises transactions and \
                          forecasts the month ahead."
                .to_string(),
            technologies: strings(&["Rust", "Actix Web", "PostgreSQL", "Chart.js"]),
            repo_url: Some("https://github.com/example/budget-tracker".to_string()),
            live_url: None,
            video_url: Some("https://videos.example.dev/budget-tracker".to_string()),
            image: Some("/images/projects/budget-tracker.png".to_string()),
            icon: Some("wallet".to_string()),
            screenshots: vec![],
            case_study: None,
            featured: true,
        },
        Project {
            id: "3".to_string(),
            title: "Recipe Finder".to_string(),
            description: "Search recipes by the ingredients already in your fridge.".to_string(),
            technologies: strings(&["TypeScript", "Next.js", "Tailwind CSS"]),
            repo_url: Some("https://github.com/example/recipe-finder".to_string()),
            live_url: Some("https://recipes.example.dev".to_string()),
            video_url: None,
            image: Some("/images/projects/recipe-finder.png".to_string()),
            icon: Some("chef-hat".to_string()),
            screenshots: vec![],
            case_study: None,
            featured: false,
        },
        Project {
            id: "4".to_string(),
            title: "Log Shipper".to_string(),
            description: "Tiny agent that tails log files and ships batched, compressed \
                          records to object storage."
                .to_string(),
            technologies: strings(&["Rust", "Tokio", "S3"]),
            repo_url: Some("https://github.com/example/log-shipper".to_string()),
            live_url: None,
            video_url: None,
            image: None,
            icon: Some("terminal".to_string()),
            screenshots: vec![],
            case_study: None,
            featured: false,
        },
    ]
}
