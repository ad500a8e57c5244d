//! Default YAML config template with inline documentation comments.

/// Generate the default YAML config content with comments.
pub(crate) fn default_config_yaml() -> String {
    r##"# Shrinkray configuration
# Only override what you want to change -- missing fields use defaults.
# Edits are picked up while the server runs; invalid changes are ignored
# and the previous settings stay active.

# Root of the media library. Must exist for a reload to be applied.
# media_path: /media

# Scratch directory for in-progress transcodes (defaults to next to the source).
# temp_path: /tmp/shrinkray

# Where the job queue is persisted.
# queue_file: /config/queue.json

# Concurrent transcode workers (1-16).
workers: 1

# What to do with the source once a transcode succeeds: replace | keep
original_handling: replace

notifications:
  notify_on_complete: false
  pushover:
    user_key: ""
    app_token: ""
  ntfy:
    server: "https://ntfy.sh"
    topic: ""
    token: ""
"##
    .to_string()
}
