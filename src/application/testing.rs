//! In-memory collaborators for application tests.

use std::cell::RefCell;

use crate::domain::entities::CollectionRecord;
use crate::domain::ports::{FinderError, FuzzyFinder, GroupRecord, NativeApi, PluginApi};
use crate::domain::value_objects::{
    CollectionRef, CreateRequest, CreateResponse, CurrentSelection, Field, SelectRequest,
    SelectResponse, SelectedTarget,
};
use crate::error::{ZoteroError, ZoteroResult};

#[derive(Debug, Default)]
pub struct FakeNative {
    personal: Vec<CollectionRecord>,
    groups: Vec<(GroupRecord, Option<Vec<CollectionRecord>>)>,
    unreachable_port: Option<u16>,
}

impl FakeNative {
    pub fn new(personal: Vec<CollectionRecord>) -> Self {
        Self {
            personal,
            ..Self::default()
        }
    }

    pub fn unreachable(port: u16) -> Self {
        Self {
            unreachable_port: Some(port),
            ..Self::default()
        }
    }

    pub fn with_group(mut self, group: GroupRecord, records: Vec<CollectionRecord>) -> Self {
        self.groups.push((group, Some(records)));
        self
    }

    pub fn with_failing_group(mut self, group: GroupRecord) -> Self {
        self.groups.push((group, None));
        self
    }

    fn check(&self) -> ZoteroResult<()> {
        match self.unreachable_port {
            Some(port) => Err(ZoteroError::Connect { port }),
            None => Ok(()),
        }
    }
}

impl NativeApi for FakeNative {
    fn personal_collections(&self) -> ZoteroResult<Vec<CollectionRecord>> {
        self.check()?;
        Ok(self.personal.clone())
    }

    fn groups(&self) -> ZoteroResult<Vec<GroupRecord>> {
        self.check()?;
        Ok(self.groups.iter().map(|(g, _)| g.clone()).collect())
    }

    fn group_collections(&self, group_id: i64) -> ZoteroResult<Vec<CollectionRecord>> {
        self.check()?;
        match self.groups.iter().find(|(g, _)| g.id == group_id) {
            Some((_, Some(records))) => Ok(records.clone()),
            _ => Err(ZoteroError::Http {
                status: 500,
                url: format!("/api/groups/{}/collections", group_id),
            }),
        }
    }
}

/// Plugin fake that records requests and answers with a fixed outcome.
#[derive(Debug, Default)]
pub struct FakePlugin {
    pub reject_with: Option<String>,
    pub selects: RefCell<Vec<SelectRequest>>,
    pub creates: RefCell<Vec<CreateRequest>>,
}

impl FakePlugin {
    pub fn rejecting(message: &str) -> Self {
        Self {
            reject_with: Some(message.to_string()),
            ..Self::default()
        }
    }
}

impl PluginApi for FakePlugin {
    fn current(&self) -> ZoteroResult<CurrentSelection> {
        Ok(CurrentSelection {
            library_id: Field::Value(1),
            library_name: Field::Value("My Library".to_string()),
            collection: Field::Value(CollectionRef {
                name: "Papers".to_string(),
                key: "PAPERS01".to_string(),
            }),
            extra: Default::default(),
        })
    }

    fn select(&self, request: &SelectRequest) -> ZoteroResult<SelectResponse> {
        self.selects.borrow_mut().push(request.clone());
        let selected = self.reject_with.is_none().then(|| SelectedTarget {
            library_id: Field::Value(request.library_id),
            collection_key: request.collection_key.clone().into(),
            ..SelectedTarget::default()
        });
        Ok(SelectResponse {
            success: self.reject_with.is_none(),
            selected: selected.into(),
            error: self.reject_with.clone().into(),
            extra: Default::default(),
        })
    }

    fn create(&self, request: &CreateRequest) -> ZoteroResult<CreateResponse> {
        self.creates.borrow_mut().push(request.clone());
        let collection = self.reject_with.is_none().then(|| CollectionRef {
            name: request.name.clone(),
            key: "NEWKEY01".to_string(),
        });
        Ok(CreateResponse {
            success: self.reject_with.is_none(),
            collection: collection.into(),
            error: self.reject_with.clone().into(),
            extra: Default::default(),
        })
    }
}

/// Finder that returns a canned answer and records what it was offered.
#[derive(Debug)]
pub struct ScriptedFinder {
    pub answer: Result<String, FinderError>,
    pub offered: RefCell<Option<String>>,
}

impl ScriptedFinder {
    pub fn picking(line: &str) -> Self {
        Self {
            answer: Ok(line.to_string()),
            offered: RefCell::new(None),
        }
    }

    pub fn failing(err: FinderError) -> Self {
        Self {
            answer: Err(err),
            offered: RefCell::new(None),
        }
    }
}

impl FuzzyFinder for ScriptedFinder {
    fn name(&self) -> &str {
        "scripted"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn pick(&self, input: &str) -> Result<String, FinderError> {
        *self.offered.borrow_mut() = Some(input.to_string());
        self.answer.clone()
    }
}
