use serde_json::{Map, Value};

/// Looks up a dot-separated `path` such as `payload.level` in a message.
pub fn property<'m>(message: &'m Value, path: &str) -> Option<&'m Value> {
  path.split('.').try_fold(message, |value, key| value.get(key))
}

/// Stores `value` at a dot-separated `path`, creating intermediate objects as needed.
///
/// Fails if the path runs through a value which is not an object.
pub fn set_property(message: &mut Value, path: &str, value: Value) -> Result<(), String> {
  let mut keys = path.split('.').peekable();
  let mut current = message;

  while let Some(key) = keys.next() {
    let object = current.as_object_mut().ok_or_else(|| format!("cannot set '{}' on a value which is not an object", key))?;

    if keys.peek().is_none() {
      object.insert(key.to_owned(), value);
      return Ok(())
    }

    current = object.entry(key).or_insert_with(|| Value::Object(Map::new()));
  }

  Err("empty property path".to_owned())
}
