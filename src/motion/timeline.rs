use crate::content::ExperienceEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEmphasis {
    Active,
    Inactive,
}

impl RowEmphasis {
    /// Card style for a timeline row with the given accent color.
    pub fn row_style(&self, color: &str) -> String {
        match self {
            RowEmphasis::Active => format!(
                "background-color: #ffffff; box-shadow: 0 3px 6px rgba(60,64,67,0.2), 0 1px 3px rgba(60,64,67,0.15); border-left: 4px solid {color};"
            ),
            RowEmphasis::Inactive => {
                "background-color: transparent; box-shadow: none; border-left: 4px solid transparent;"
                    .to_string()
            }
        }
    }

    pub fn company_color<'a>(&self, color: &'a str) -> &'a str {
        match self {
            RowEmphasis::Active => color,
            RowEmphasis::Inactive => "var(--color-text-secondary)",
        }
    }
}

/// Selection state of the experience timeline.
///
/// The active index always points into `entries`: construction refuses an
/// empty slice and `select` ignores out-of-range indices. `generation` grows on
/// every accepted selection, so the detail panel can be re-created (and its
/// entrance replayed) even when the same row is clicked twice.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline<'a> {
    entries: &'a [ExperienceEntry],
    active: usize,
    generation: u64,
}

impl<'a> Timeline<'a> {
    pub fn new(entries: &'a [ExperienceEntry]) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        Some(Self {
            entries,
            active: 0,
            generation: 0,
        })
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn active_entry(&self) -> &'a ExperienceEntry {
        &self.entries[self.active]
    }

    /// Returns `false` (and changes nothing) for an index outside the timeline.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            log::debug!("ignoring timeline selection {index} of {}", self.entries.len());
            return false;
        }
        self.active = index;
        self.generation += 1;
        true
    }

    pub fn emphasis(&self, index: usize) -> RowEmphasis {
        if index == self.active {
            RowEmphasis::Active
        } else {
            RowEmphasis::Inactive
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = (usize, &'a ExperienceEntry, RowEmphasis)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(move |(i, e)| (i, e, self.emphasis(i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::portfolio;

    fn entries() -> Vec<ExperienceEntry> {
        ["#1a73e8", "#34a853", "#ea4335"]
            .iter()
            .enumerate()
            .map(|(i, color)| ExperienceEntry {
                company: format!("Company {i}"),
                role: format!("Role {i}"),
                period: format!("20{i}0 - 20{i}5"),
                color: color.to_string(),
                description: format!("Description {i}"),
                highlights: vec![format!("Highlight {i}a"), format!("Highlight {i}b")],
                skills: vec![format!("Skill {i}")],
            })
            .collect()
    }

    #[test]
    fn test_starts_at_first_entry() {
        let entries = entries();
        let timeline = Timeline::new(&entries).unwrap();
        assert_eq!(timeline.active(), 0);
        assert_eq!(timeline.generation(), 0);
        assert_eq!(timeline.active_entry().company, "Company 0");
    }

    #[test]
    fn test_empty_timeline_refused() {
        assert!(Timeline::new(&[]).is_none());
    }

    #[test]
    fn test_reselect_replays_animation() {
        let entries = entries();
        let mut timeline = Timeline::new(&entries).unwrap();
        assert!(timeline.select(2));
        assert_eq!(timeline.active(), 2);
        assert_eq!(timeline.generation(), 1);
        assert!(timeline.select(2));
        assert_eq!(timeline.active(), 2);
        assert_eq!(timeline.generation(), 2);
        assert!(timeline.select(0));
        assert_eq!(timeline.active(), 0);
        assert_eq!(timeline.generation(), 3);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let entries = entries();
        let mut timeline = Timeline::new(&entries).unwrap();
        timeline.select(1);
        assert!(!timeline.select(3));
        assert!(!timeline.select(usize::MAX));
        assert_eq!(timeline.active(), 1);
        assert_eq!(timeline.generation(), 1);
    }

    #[test]
    fn test_row_styles() {
        let active = RowEmphasis::Active.row_style("#34a853");
        assert!(active.contains("border-left: 4px solid #34a853"));
        assert!(active.contains("background-color: #ffffff"));
        let inactive = RowEmphasis::Inactive.row_style("#34a853");
        assert!(inactive.contains("border-left: 4px solid transparent"));
        assert!(inactive.contains("box-shadow: none"));
        assert_eq!(RowEmphasis::Active.company_color("#34a853"), "#34a853");
        assert_eq!(
            RowEmphasis::Inactive.company_color("#34a853"),
            "var(--color-text-secondary)"
        );
    }

    #[test]
    fn test_select_second_row_of_loaded_portfolio() {
        let portfolio = portfolio().expect("embedded content should be valid");
        let mut timeline = Timeline::new(&portfolio.experiences).unwrap();
        assert_eq!(timeline.rows().count(), 3);

        timeline.select(1);
        assert_eq!(timeline.active(), 1);

        let detail = timeline.active_entry();
        assert_eq!(detail.company, "Constantinople");
        assert_eq!(detail.role, "Software Engineer III");
        assert_eq!(detail.period, "Aug 2022 - Apr 2025");
        assert_eq!(
            detail.description,
            "Fintech scale-up building next-gen payment infrastructure"
        );
        assert_eq!(
            detail.highlights,
            vec![
                "Architected distributed microservices supporting 50K+ DAU with 99.9% uptime",
                "Built payment orchestration layer reducing integration overhead by 30%",
                "Launched card features boosting activation rates by 20%",
            ]
        );
        assert_eq!(detail.skills, vec!["Go", "Java", "Kubernetes", "gRPC"]);

        let emphasis = timeline.rows().map(|(_, _, e)| e).collect::<Vec<_>>();
        assert_eq!(
            emphasis,
            vec![
                RowEmphasis::Inactive,
                RowEmphasis::Active,
                RowEmphasis::Inactive,
            ]
        );
        let first = timeline.rows().next().unwrap();
        assert!(first.2.row_style(&first.1.color).contains("transparent"));
    }
}
