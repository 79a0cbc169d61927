// src/descriptor.rs

//! Build descriptor for the Central Processor internal documentation module
//!
//! The whole job: declare the literal metadata, register the module's own
//! dependency requirement, hand the finished record to the toolchain. One
//! linear sequence, no branches, no retries.

use tracing::info;

use crate::dependencies::{DependencyResolver, DependencySet};
use crate::error::Result;
use crate::metadata::PackageMetadata;
use crate::setup::Setup;

/// Package name, also used as the root package identifier.
pub const PKG_NAME: &str = "current";

/// The literal metadata record for the documentation module.
///
/// Every field is a literal; only the dependency set comes from the caller,
/// which must have fully populated it already.
pub fn metadata(dependencies: DependencySet) -> PackageMetadata {
    PackageMetadata {
        name: PKG_NAME.to_string(),
        root_package: PKG_NAME.to_string(),
        description: "ASKAP Central Processor Internal Documentation".to_string(),
        author: "ASKAP Software and Computing".to_string(),
        author_email: "Ben.Humphreys@csiro.au".to_string(),
        url: "http://svn.atnf.csiro.au/askap".to_string(),
        keywords: vec!["ASKAP".to_string(), "central processor".to_string()],
        license: "GPL".to_string(),
        dependencies,
    }
}

/// Run the descriptor: build the dependency set, register this package,
/// invoke setup, and return the toolchain's exit status untouched.
///
/// Any resolver or toolchain error propagates to the caller; the descriptor
/// performs no recovery of its own.
pub fn run(resolver: &dyn DependencyResolver, setup: &dyn Setup, args: &[String]) -> Result<i32> {
    let mut deps = resolver.build_set();
    resolver.register_self(&mut deps)?;
    info!("registered {} build requirement(s)", deps.len());

    setup.run(&metadata(deps), args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_root_package_are_current() {
        let record = metadata(DependencySet::new());
        assert_eq!(record.name, "current");
        assert_eq!(record.root_package, "current");
    }

    #[test]
    fn test_keywords_are_an_ordered_pair() {
        let record = metadata(DependencySet::new());
        assert_eq!(record.keywords, vec!["ASKAP", "central processor"]);
    }

    #[test]
    fn test_license_is_gpl() {
        let record = metadata(DependencySet::new());
        assert_eq!(record.license, "GPL");
    }
}
