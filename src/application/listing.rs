//! Library listing
//!
//! Fetches personal collections, the group list, and each group's
//! collections (one group at a time), then builds one forest per library.

use crate::domain::entities::Library;
use crate::domain::ports::NativeApi;
use crate::domain::services::build_tree;
use crate::error::ZoteroResult;

/// List every library with its collection forest.
///
/// Failing to fetch the personal collections or the group list aborts the
/// listing. Failing to fetch one group's collections lists that group with
/// no collections.
pub fn list_libraries<N: NativeApi + ?Sized>(native: &N) -> ZoteroResult<Vec<Library>> {
    let personal = native.personal_collections()?;
    let mut libraries = vec![Library::personal(build_tree(personal))];

    for group in native.groups()? {
        let records = match native.group_collections(group.id) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(
                    group_id = group.id,
                    error = %err,
                    "could not fetch group collections, listing group as empty"
                );
                Vec::new()
            }
        };
        libraries.push(Library::group(
            group.id,
            group.display_name(),
            build_tree(records),
        ));
    }

    tracing::debug!(libraries = libraries.len(), "listed libraries");
    Ok(libraries)
}
