// tests/descriptor.rs

//! End-to-end descriptor runs against stub collaborators: the stub setup must
//! receive a metadata record whose fields all match the declared literals.

use pkgdesc::dependencies::{DependencyResolver, DependencySet, ManifestResolver, PackageDep};
use pkgdesc::descriptor;
use pkgdesc::metadata::PackageMetadata;
use pkgdesc::setup::Setup;
use pkgdesc::{Error, Result};
use std::cell::RefCell;
use std::io::Write;
use tempfile::NamedTempFile;

/// Stub resolver that registers the current package without touching disk.
struct StubResolver;

impl DependencyResolver for StubResolver {
    fn register_self(&self, set: &mut DependencySet) -> Result<()> {
        set.add(PackageDep {
            name: "current".to_string(),
            path: None,
            version: None,
        });
        Ok(())
    }
}

/// Stub setup that records the metadata it is handed and reports a fixed
/// exit status.
struct RecordingSetup {
    received: RefCell<Option<PackageMetadata>>,
    status: i32,
}

impl RecordingSetup {
    fn new(status: i32) -> Self {
        Self {
            received: RefCell::new(None),
            status,
        }
    }
}

impl Setup for RecordingSetup {
    fn run(&self, metadata: &PackageMetadata, _args: &[String]) -> Result<i32> {
        *self.received.borrow_mut() = Some(metadata.clone());
        Ok(self.status)
    }
}

#[test]
fn test_setup_receives_the_full_literal_record() {
    let setup = RecordingSetup::new(0);
    let status = descriptor::run(&StubResolver, &setup, &[]).unwrap();
    assert_eq!(status, 0);

    let received = setup.received.borrow().clone().expect("setup was invoked");
    assert_eq!(received.name, "current");
    assert_eq!(received.root_package, "current");
    assert_eq!(
        received.description,
        "ASKAP Central Processor Internal Documentation"
    );
    assert_eq!(received.author, "ASKAP Software and Computing");
    assert_eq!(received.author_email, "Ben.Humphreys@csiro.au");
    assert_eq!(received.url, "http://svn.atnf.csiro.au/askap");
    assert_eq!(received.keywords, vec!["ASKAP", "central processor"]);
    assert_eq!(received.license, "GPL");

    // Exactly one entry, the current package itself
    assert_eq!(received.dependencies.len(), 1);
    assert!(received.dependencies.contains("current"));
}

#[test]
fn test_toolchain_exit_status_is_returned_untouched() {
    let setup = RecordingSetup::new(3);
    let status = descriptor::run(&StubResolver, &setup, &[]).unwrap();
    assert_eq!(status, 3);
}

#[test]
fn test_descriptor_runs_against_a_manifest_on_disk() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[package]\nname = \"current\"\npath = \"Code/Components/CP/docs_internal\""
    )
    .unwrap();

    let resolver = ManifestResolver::new(file.path());
    let setup = RecordingSetup::new(0);
    descriptor::run(&resolver, &setup, &[]).unwrap();

    let received = setup.received.borrow().clone().expect("setup was invoked");
    assert_eq!(received.dependencies.len(), 1);
    let entry = received.dependencies.iter().next().unwrap();
    assert_eq!(entry.name, "current");
    assert_eq!(
        entry.path.as_deref(),
        Some("Code/Components/CP/docs_internal")
    );
}

#[test]
fn test_resolution_failure_stops_the_run_before_setup() {
    let resolver = ManifestResolver::new("/nonexistent/dependencies.toml");
    let setup = RecordingSetup::new(0);

    let err = descriptor::run(&resolver, &setup, &[]).unwrap_err();
    assert!(matches!(err, Error::ManifestRead { .. }));
    assert!(setup.received.borrow().is_none());
}
