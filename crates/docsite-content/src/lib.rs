//! Content collection scanning for docsite.
//!
//! Walks a documentation source directory and produces the
//! [`ContentEntry`](docsite_nav::ContentEntry) snapshot consumed by navigation
//! resolution. Titles come from front matter, the first H1 heading, or the
//! filename; `sidebar.order` and `sidebar.hidden` front matter fields feed
//! autogenerated sidebar groups.
//!
//! # Example
//!
//! ```
//! use docsite_content::Scanner;
//! use docsite_nav::ContentIndex;
//!
//! let docs = tempfile::tempdir()?;
//! std::fs::create_dir(docs.path().join("guides"))?;
//! std::fs::write(
//!     docs.path().join("guides/installation.md"),
//!     "---\ntitle: Installation\nsidebar:\n  order: 1\n---\n",
//! )?;
//!
//! let index: ContentIndex = Scanner::new(docs.path().to_path_buf())
//!     .scan()
//!     .into_iter()
//!     .collect();
//!
//! let entry = index.get("/guides/installation/").unwrap();
//! assert_eq!(entry.title, "Installation");
//! assert_eq!(entry.order, Some(1));
//! # Ok::<(), std::io::Error>(())
//! ```

mod front_matter;
mod scanner;
mod title;

pub use scanner::Scanner;
