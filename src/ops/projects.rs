use crate::model::project::{Project, ProjectFilter, SortOrder};

/// Filter, search, and sort the catalog into display order.
///
/// `search` is matched case-insensitively as a substring of the title or of
/// any tag; an empty search keeps everything. Sorting is stable, so equal
/// keys keep catalog order.
pub fn compute_visible_projects<'a>(
    all: &'a [Project],
    filter: ProjectFilter,
    search: &str,
    sort: SortOrder,
) -> Vec<&'a Project> {
    let term = search.to_lowercase();
    let mut list: Vec<&Project> = all
        .iter()
        .filter(|p| filter.matches(p.kind))
        .filter(|p| term.is_empty() || matches_search(p, &term))
        .collect();

    match sort {
        SortOrder::Newest => list.sort_by(|a, b| b.date.cmp(&a.date)),
        SortOrder::Oldest => list.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::Az => list.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortOrder::Za => list.sort_by(|a, b| compare_titles(&b.title, &a.title)),
        SortOrder::Catalog => {}
    }
    list
}

/// `term` must already be lowercased
fn matches_search(project: &Project, term: &str) -> bool {
    project.title.to_lowercase().contains(term)
        || project.tags.iter().any(|t| t.to_lowercase().contains(term))
}

/// Case-insensitive title order with a case-sensitive tiebreak
fn compare_titles(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::Catalog;
    use crate::model::project::ProjectType;
    use pretty_assertions::assert_eq;

    fn titles(list: &[&Project]) -> Vec<String> {
        list.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn frontend_sorted_az() {
        let catalog = Catalog::default();
        let list = compute_visible_projects(
            &catalog.projects,
            ProjectFilter::Type(ProjectType::Frontend),
            "",
            SortOrder::Az,
        );
        assert_eq!(titles(&list), vec!["Landing Page UI", "Portfolio Website"]);
    }

    #[test]
    fn every_result_matches_filter_and_search() {
        let catalog = Catalog::default();
        let filters = [
            ProjectFilter::All,
            ProjectFilter::Type(ProjectType::Frontend),
            ProjectFilter::Type(ProjectType::Fullstack),
            ProjectFilter::Type(ProjectType::Practice),
        ];
        for filter in filters {
            for search in ["", "java", "CSS", "api", "zzz"] {
                let term = search.to_lowercase();
                for p in compute_visible_projects(&catalog.projects, filter, search, SortOrder::Newest) {
                    assert!(filter.matches(p.kind));
                    assert!(
                        p.title.to_lowercase().contains(&term)
                            || p.tags.iter().any(|t| t.to_lowercase().contains(&term))
                    );
                }
            }
        }
    }

    #[test]
    fn search_matches_tags_case_insensitively() {
        let catalog = Catalog::default();
        let list =
            compute_visible_projects(&catalog.projects, ProjectFilter::All, "json", SortOrder::Oldest);
        assert_eq!(titles(&list), vec!["Weather Dashboard"]);

        let list =
            compute_visible_projects(&catalog.projects, ProjectFilter::All, "DOM", SortOrder::Newest);
        assert_eq!(titles(&list), vec!["JavaScript Mini Games"]);
    }

    #[test]
    fn no_match_is_empty() {
        let catalog = Catalog::default();
        let list = compute_visible_projects(
            &catalog.projects,
            ProjectFilter::Type(ProjectType::Fullstack),
            "css",
            SortOrder::Newest,
        );
        assert!(list.is_empty());
    }

    #[test]
    fn za_is_reverse_of_az() {
        let catalog = Catalog::default();
        let mut az = titles(&compute_visible_projects(
            &catalog.projects,
            ProjectFilter::All,
            "",
            SortOrder::Az,
        ));
        let za = titles(&compute_visible_projects(
            &catalog.projects,
            ProjectFilter::All,
            "",
            SortOrder::Za,
        ));
        az.reverse();
        assert_eq!(az, za);
    }

    #[test]
    fn newest_is_reverse_of_oldest() {
        let catalog = Catalog::default();
        let mut oldest = titles(&compute_visible_projects(
            &catalog.projects,
            ProjectFilter::All,
            "",
            SortOrder::Oldest,
        ));
        let newest = titles(&compute_visible_projects(
            &catalog.projects,
            ProjectFilter::All,
            "",
            SortOrder::Newest,
        ));
        oldest.reverse();
        assert_eq!(oldest, newest);
        assert_eq!(newest[0], "Node.js API Practice");
    }

    #[test]
    fn catalog_order_is_unchanged() {
        let catalog = Catalog::default();
        let list =
            compute_visible_projects(&catalog.projects, ProjectFilter::All, "", SortOrder::Catalog);
        let ids: Vec<u32> = list.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
