use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct CommentThread {
  pub(crate) replies: Option<CommentReplies>,
  pub(crate) snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentReplies {
  #[serde(default)]
  pub(crate) comments: Vec<Comment>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommentThreadSnippet {
  pub(crate) top_level_comment: Comment,
  #[serde(default)]
  pub(crate) total_reply_count: u64,
}

impl CommentThread {
  pub(crate) fn into_records(self) -> Vec<CommentRecord> {
    let replies = self
      .replies
      .map(|replies| replies.comments)
      .unwrap_or_default();

    let mut records = Vec::with_capacity(1 + replies.len());

    records.push(CommentRecord::top_level(
      self.snippet.top_level_comment,
      self.snippet.total_reply_count,
    ));

    records.extend(replies.into_iter().map(CommentRecord::reply));

    records
  }
}

#[cfg(test)]
mod tests {
  use {super::*, serde_json::json};

  fn parse(value: Value) -> CommentThread {
    serde_json::from_value(value).unwrap()
  }

  fn comment(author: &str, text: &str, likes: u64) -> Value {
    json!({
      "snippet": {
        "authorDisplayName": author,
        "textDisplay": text,
        "likeCount": likes,
        "publishedAt": "2024-01-02T03:04:05Z",
        "updatedAt": "2024-01-03T03:04:05Z",
      }
    })
  }

  #[test]
  fn thread_without_replies_yields_one_record() {
    let thread = parse(json!({
      "snippet": {
        "topLevelComment": comment("alice", "first!", 3),
        "totalReplyCount": 0,
      }
    }));

    let records = thread.into_records();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].display_name, "alice");
    assert_eq!(records[0].body, "first!");
    assert_eq!(records[0].like_count, 3);
    assert_eq!(records[0].published_at, "2024-01-02T03:04:05Z");
    assert_eq!(records[0].updated_at, "2024-01-03T03:04:05Z");
    assert!(!records[0].is_reply());
  }

  #[test]
  fn thread_with_replies_yields_top_level_then_replies() {
    let thread = parse(json!({
      "snippet": {
        "topLevelComment": comment("alice", "question", 10),
        "totalReplyCount": 7,
      },
      "replies": {
        "comments": [comment("bob", "answer", 2), comment("carol", "thanks", 0)],
      }
    }));

    let records = thread.into_records();

    assert_eq!(records.len(), 3);

    assert_eq!(records[0].display_name, "alice");
    assert_eq!(records[0].reply_count, 7);

    assert_eq!(records[1].display_name, format!("{REPLY_MARKER}bob"));
    assert_eq!(records[1].body, "answer");
    assert_eq!(records[1].reply_count, 0);

    assert_eq!(records[2].display_name, format!("{REPLY_MARKER}carol"));
    assert_eq!(records[2].reply_count, 0);

    assert!(records[1..].iter().all(CommentRecord::is_reply));
  }

  #[test]
  fn empty_replies_collection_yields_one_record() {
    let thread = parse(json!({
      "snippet": {
        "topLevelComment": comment("alice", "hello", 0),
        "totalReplyCount": 2,
      },
      "replies": {}
    }));

    assert_eq!(thread.into_records().len(), 1);
  }

  #[test]
  fn missing_snippet_fields_fall_back_to_defaults() {
    let thread = parse(json!({
      "snippet": {
        "topLevelComment": {
          "snippet": { "publishedAt": "2024-05-06T07:08:09Z" }
        }
      }
    }));

    let records = thread.into_records();

    assert_eq!(records[0].display_name, "unknown");
    assert_eq!(records[0].body, "");
    assert_eq!(records[0].like_count, 0);
    assert_eq!(records[0].reply_count, 0);
    assert_eq!(records[0].updated_at, "2024-05-06T07:08:09Z");
  }
}
