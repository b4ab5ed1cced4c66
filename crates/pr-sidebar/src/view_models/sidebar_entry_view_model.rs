//! View model for a single pull request in the sidebar
//!
//! Maps a pull request plus the ambient project and route into the props of
//! the generic sidebar entry widget, and turns a primary press into a route
//! change. Recomputed on every render, so `selected` always reflects the
//! current route.

use chrono::{DateTime, Utc};
use std::fmt::Write;

use crate::context::{ContextError, ViewContext};
use crate::domain_models::{Project, PullRequest, Route};
use crate::router::Navigator;

/// Author label when the pull request has no (named) author
pub const UNKNOWN_AUTHOR: &str = "Unknown";
/// Avatar name when the author has an avatar but no name.
/// Lowercase on purpose, it differs from [`UNKNOWN_AUTHOR`].
pub const UNKNOWN_AVATAR_NAME: &str = "unknown";

/// Who touched the entry last, and when
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastCommit {
    pub author_name: String,
    pub last_commit_at: Option<DateTime<Utc>>,
}

impl LastCommit {
    /// "Alice · 2024-03-01 12:30", or just the name without a timestamp
    pub fn describe(&self, timestamp_format: &str) -> String {
        match self.last_commit_at {
            Some(at) => format!("{} · {}", self.author_name, format_timestamp(at, timestamp_format)),
            None => self.author_name.clone(),
        }
    }
}

/// Format `at` with a chrono format string, falling back to RFC 3339 when
/// the format contains specifiers chrono cannot render.
pub fn format_timestamp(at: DateTime<Utc>, timestamp_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", at.format(timestamp_format)).is_err() {
        log::warn!("Cannot format timestamp with {:?}", timestamp_format);
        return at.to_rfc3339();
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestDescriptor {
    pub title: String,
}

/// One avatar of an avatar group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    /// Image URL; the entry widget draws the initial of `name`, the detail pane shows the URL
    pub src_url: String,
    pub name: String,
}

/// Props of the generic sidebar entry widget
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryProps {
    pub title: String,
    /// Remote branch names
    pub remotes: Vec<String>,
    /// Entry exists locally
    pub local: bool,
    /// Entry is applied to the workspace
    pub applied: bool,
    pub last_commit: Option<LastCommit>,
    pub pull_request: Option<PullRequestDescriptor>,
    /// Entry is the current route
    pub selected: bool,
    /// Content of the avatar group slot
    pub avatars: Vec<Avatar>,
}

/// Route of a pull request inside a project: `/{project.id}/pull/{pr.number}`
pub fn pull_request_url(project: &Project, pr: &PullRequest) -> String {
    Route::pull_request(project.id.as_str(), pr.number).path()
}

/// Sidebar entry for one pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntryViewModel {
    /// Where a primary press navigates to
    pub url: String,
    pub props: EntryProps,
}

impl SidebarEntryViewModel {
    /// Build the entry. Fails only if no project is bound in `ctx`.
    pub fn new(pr: &PullRequest, ctx: &ViewContext<'_>) -> Result<Self, ContextError> {
        let project = ctx.project()?;
        let url = pull_request_url(project, pr);
        let selected = ctx.current_path() == url;

        let author_name = pr.author.as_ref().and_then(|a| a.name.as_deref());

        let avatars = pr
            .author
            .as_ref()
            .and_then(|author| {
                author.gravatar_url.as_ref().map(|src_url| Avatar {
                    src_url: src_url.clone(),
                    name: author
                        .name
                        .clone()
                        .unwrap_or_else(|| UNKNOWN_AVATAR_NAME.to_string()),
                })
            })
            .into_iter()
            .collect();

        let props = EntryProps {
            title: pr.title.clone(),
            remotes: Vec::new(),
            local: false,
            applied: false,
            last_commit: Some(LastCommit {
                author_name: author_name.unwrap_or(UNKNOWN_AUTHOR).to_string(),
                last_commit_at: pr.modified_at,
            }),
            pull_request: Some(PullRequestDescriptor {
                title: pr.title.clone(),
            }),
            selected,
            avatars,
        };

        Ok(Self { url, props })
    }

    /// Primary pointer-down on the entry
    pub fn on_mouse_down(&self, navigator: &impl Navigator) {
        navigator.navigate(&self.url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::Author;
    use chrono::TimeZone;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNavigator {
        urls: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, url: &str) {
            self.urls.borrow_mut().push(url.to_string());
        }
    }

    fn t(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_describe_last_commit() {
        let last_commit = LastCommit {
            author_name: "Alice".to_string(),
            last_commit_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()),
        };
        assert_eq!(last_commit.describe("%Y-%m-%d %H:%M"), "Alice · 2024-03-01 12:30");

        let without_time = LastCommit {
            last_commit_at: None,
            ..last_commit
        };
        assert_eq!(without_time.describe("%H:%M"), "Alice");
    }

    #[test]
    fn test_describe_with_unknown_specifier_does_not_panic() {
        let last_commit = LastCommit {
            author_name: "Alice".to_string(),
            last_commit_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()),
        };
        assert_eq!(
            last_commit.describe("%Q"),
            "Alice · 2024-03-01T12:30:00+00:00"
        );
    }

    #[test]
    fn test_entry_with_author_and_avatar() {
        let project = Project::new("proj1");
        let pr = PullRequest::new(42, "Fix bug")
            .with_author(Author::named("Alice").with_gravatar_url("http://x/a.png"))
            .with_modified_at(t(10));
        let ctx = ViewContext::new(Some(&project), "/proj1");

        let vm = SidebarEntryViewModel::new(&pr, &ctx).unwrap();

        assert_eq!(vm.url, "/proj1/pull/42");
        assert_eq!(
            vm.props.avatars,
            vec![Avatar {
                src_url: "http://x/a.png".to_string(),
                name: "Alice".to_string(),
            }]
        );
        assert_eq!(
            vm.props.last_commit,
            Some(LastCommit {
                author_name: "Alice".to_string(),
                last_commit_at: Some(t(10)),
            })
        );
        assert!(!vm.props.selected);
    }

    #[test]
    fn test_entry_without_author() {
        let project = Project::new("proj2");
        let pr = PullRequest::new(7, "No author").with_modified_at(t(11));
        let ctx = ViewContext::new(Some(&project), "/proj2");

        let vm = SidebarEntryViewModel::new(&pr, &ctx).unwrap();

        assert_eq!(vm.url, "/proj2/pull/7");
        assert!(vm.props.avatars.is_empty());
        assert_eq!(
            vm.props.last_commit,
            Some(LastCommit {
                author_name: "Unknown".to_string(),
                last_commit_at: Some(t(11)),
            })
        );
    }

    #[test]
    fn test_author_without_name_falls_back() {
        let project = Project::new("p");
        let pr = PullRequest::new(1, "t").with_author(Author {
            name: None,
            gravatar_url: Some("http://x/b.png".to_string()),
        });
        let ctx = ViewContext::new(Some(&project), "/");

        let vm = SidebarEntryViewModel::new(&pr, &ctx).unwrap();

        assert_eq!(vm.props.last_commit.unwrap().author_name, "Unknown");
        assert_eq!(vm.props.avatars.len(), 1);
        assert_eq!(vm.props.avatars[0].name, "unknown");
        assert_eq!(vm.props.avatars[0].src_url, "http://x/b.png");
    }

    #[test]
    fn test_author_without_avatar_has_no_avatars() {
        let project = Project::new("p");
        let pr = PullRequest::new(1, "t").with_author(Author::named("Bob"));
        let ctx = ViewContext::new(Some(&project), "/");

        let vm = SidebarEntryViewModel::new(&pr, &ctx).unwrap();

        assert!(vm.props.avatars.is_empty());
        assert_eq!(vm.props.last_commit.unwrap().author_name, "Bob");
    }

    #[test]
    fn test_fixed_props() {
        let project = Project::new("p");
        let pr = PullRequest::new(3, "Title");
        let ctx = ViewContext::new(Some(&project), "/");

        let props = SidebarEntryViewModel::new(&pr, &ctx).unwrap().props;

        assert_eq!(props.title, "Title");
        assert!(props.remotes.is_empty());
        assert!(!props.local);
        assert!(!props.applied);
        assert_eq!(
            props.pull_request,
            Some(PullRequestDescriptor {
                title: "Title".to_string()
            })
        );
        assert_eq!(props.last_commit.unwrap().last_commit_at, None);
    }

    #[test]
    fn test_selected_only_on_exact_path() {
        let project = Project::new("proj1");
        let pr = PullRequest::new(42, "Fix bug");

        let selected = |path: &str| {
            let ctx = ViewContext::new(Some(&project), path);
            SidebarEntryViewModel::new(&pr, &ctx).unwrap().props.selected
        };

        assert!(selected("/proj1/pull/42"));
        assert!(!selected("/proj1/pull/42/"));
        assert!(!selected("/proj1/pull/420"));
        assert!(!selected("/proj1/pull/4"));
        assert!(!selected("/other/pull/42"));
        assert!(!selected("/proj1"));
    }

    #[test]
    fn test_selected_follows_project_binding() {
        let first = Project::new("a");
        let second = Project::new("b");
        let pr = PullRequest::new(5, "t");
        let ctx = ViewContext::new(Some(&first), "/b/pull/5");

        assert!(!SidebarEntryViewModel::new(&pr, &ctx).unwrap().props.selected);

        let rebound = ViewContext::new(Some(&second), ctx.current_path());
        let vm = SidebarEntryViewModel::new(&pr, &rebound).unwrap();
        assert_eq!(vm.url, "/b/pull/5");
        assert!(vm.props.selected);
    }

    #[test]
    fn test_missing_project_is_an_error() {
        let pr = PullRequest::new(1, "t");
        let ctx = ViewContext::new(None, "/");

        assert_eq!(
            SidebarEntryViewModel::new(&pr, &ctx),
            Err(ContextError::MissingProject)
        );
    }

    #[test]
    fn test_on_mouse_down_navigates_to_url() {
        let project = Project::new("proj1");
        let pr = PullRequest::new(42, "Fix bug");
        let ctx = ViewContext::new(Some(&project), "/proj1");
        let navigator = RecordingNavigator::default();

        SidebarEntryViewModel::new(&pr, &ctx)
            .unwrap()
            .on_mouse_down(&navigator);

        assert_eq!(*navigator.urls.borrow(), vec!["/proj1/pull/42".to_string()]);
    }

    #[test]
    fn test_last_commit_describe() {
        let with_time = LastCommit {
            author_name: "Alice".to_string(),
            last_commit_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()),
        };
        assert_eq!(with_time.describe("%Y-%m-%d %H:%M"), "Alice · 2024-03-01 12:30");

        let without_time = LastCommit {
            author_name: "Unknown".to_string(),
            last_commit_at: None,
        };
        assert_eq!(without_time.describe("%Y-%m-%d %H:%M"), "Unknown");
    }
}
