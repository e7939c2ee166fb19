use pretty_assertions::assert_eq;
use serde_json::Value;
use server::devops::{create_url, patch_document};
use shared_types::WorkItemDraft;

fn draft(title: &str) -> WorkItemDraft {
    WorkItemDraft {
        title: title.to_string(),
        ..WorkItemDraft::default()
    }
}

fn paths(doc: &Value) -> Vec<String> {
    doc.as_array()
        .unwrap()
        .iter()
        .map(|op| op["path"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn url_percent_encodes_the_type_segment() {
    let url = create_url("contoso", "Platform", "PBI Feature");
    assert_eq!(
        url,
        "https://dev.azure.com/contoso/Platform/_apis/wit/workitems/$PBI%20Feature?api-version=7.1"
    );
}

#[test]
fn minimal_draft_produces_only_the_title_op() {
    let doc = patch_document(&draft("Fix bug"), "contoso");

    assert_eq!(paths(&doc), vec!["/fields/System.Title".to_string()]);
    let ops = doc.as_array().unwrap();
    assert_eq!(ops[0]["op"], "add");
    assert_eq!(ops[0]["value"], "Fix bug");
}

#[test]
fn optional_fields_appear_only_when_non_empty() {
    let mut d = draft("Fix bug");
    d.description = "details".to_string();
    d.acceptance_criteria = "it works".to_string();

    let doc = patch_document(&d, "contoso");
    assert_eq!(
        paths(&doc),
        vec![
            "/fields/System.Title".to_string(),
            "/fields/System.Description".to_string(),
            "/fields/Microsoft.VSTS.Common.AcceptanceCriteria".to_string(),
        ]
    );
}

#[test]
fn parent_id_becomes_a_hierarchy_relation() {
    let mut d = draft("Fix bug");
    d.parent_id = Some(17);

    let doc = patch_document(&d, "contoso");
    let ops = doc.as_array().unwrap();
    let relation = ops.last().unwrap();

    assert_eq!(relation["path"], "/relations/-");
    assert_eq!(relation["value"]["rel"], "System.LinkTypes.Hierarchy-Reverse");
    assert_eq!(
        relation["value"]["url"],
        "https://dev.azure.com/contoso/_apis/wit/workItems/17"
    );
}

#[test]
fn absent_parent_produces_no_relation_op() {
    let doc = patch_document(&draft("Fix bug"), "contoso");
    assert!(paths(&doc).iter().all(|p| p != "/relations/-"));
}
