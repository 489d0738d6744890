//! crates/logg/src/call_site.rs
//! Call-site descriptors attached to error and debug lines.

use std::hash::{Hash, Hasher};
use std::path::Path;
use std::thread;

use rustc_hash::FxHasher;

/// Location of a logging call: thread, source file, line and enclosing function.
///
/// Descriptors are built fresh for every call, usually through
/// [`call_site!`](crate::call_site), and dropped once the line is written.
///
/// # Examples
///
/// ```
/// use logg::CallSite;
///
/// let site = CallSite::from_parts(0x2a, "src/net/server.rs", 17, "server::accept_loop");
/// assert_eq!(site.file_name(), "server.rs");
/// assert_eq!(site.function_name(), "accept_loop");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CallSite {
    thread: u64,
    file: &'static str,
    line: u32,
    function: &'static str,
}

impl CallSite {
    /// Creates a descriptor for the current thread.
    #[must_use]
    pub fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self::from_parts(current_thread_id(), file, line, function)
    }

    /// Creates a descriptor with an explicit thread identifier.
    #[must_use]
    pub const fn from_parts(
        thread: u64,
        file: &'static str,
        line: u32,
        function: &'static str,
    ) -> Self {
        Self {
            thread,
            file,
            line,
            function,
        }
    }

    /// Hashed identifier of the thread that made the call.
    #[must_use]
    pub const fn thread(&self) -> u64 {
        self.thread
    }

    /// Source file exactly as captured.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Basename of the source file.
    #[must_use]
    pub fn file_name(&self) -> &'static str {
        Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file)
    }

    /// Line number of the call.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Raw function text as captured.
    #[must_use]
    pub const fn function(&self) -> &'static str {
        self.function
    }

    /// Short form of the enclosing function, see [`short_function_name`].
    #[must_use]
    pub fn function_name(&self) -> &'static str {
        short_function_name(self.function)
    }
}

/// Returns the hashed identifier of the calling thread.
///
/// The value is stable for the lifetime of the thread.
#[must_use]
pub fn current_thread_id() -> u64 {
    let mut hasher = FxHasher::default();
    thread::current().id().hash(&mut hasher);
    hasher.finish()
}

/// Reduces a function signature or path to its bare name.
///
/// Text up to and including the first whitespace is treated as a return type
/// and dropped, the argument list starting at the first `(` is cut, trailing
/// `{{closure}}` segments are removed and the last `::` segment outside angle
/// brackets is kept. This is a textual heuristic; unusual input such as
/// operator overloads renders oddly but never fails.
///
/// # Examples
///
/// ```
/// use logg::short_function_name;
///
/// assert_eq!(short_function_name("void network::Server::run(int, char**)"), "run");
/// assert_eq!(short_function_name("my_app::worker::spawn::{{closure}}"), "spawn");
/// assert_eq!(short_function_name("main"), "main");
/// ```
#[must_use]
pub fn short_function_name(raw: &str) -> &str {
    let name = raw
        .split_once(char::is_whitespace)
        .map_or(raw, |(_, rest)| rest);
    let mut name = name.split_once('(').map_or(name, |(head, _)| head);

    while let Some(stripped) = name.strip_suffix("::{{closure}}") {
        name = stripped;
    }

    last_path_segment(name)
}

fn last_path_segment(path: &str) -> &str {
    let bytes = path.as_bytes();
    let mut depth = 0usize;
    let mut start = 0;
    let mut index = 0;

    while index < bytes.len() {
        match bytes[index] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(index + 1) == Some(&b':') => {
                start = index + 2;
                index += 1;
            }
            _ => {}
        }
        index += 1;
    }

    &path[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_strips_directories() {
        let site = CallSite::from_parts(1, "/home/dev/project/src/lib.rs", 3, "lib::f");
        assert_eq!(site.file_name(), "lib.rs");
        assert_eq!(site.file(), "/home/dev/project/src/lib.rs");
    }

    #[test]
    fn file_name_without_separator_is_unchanged() {
        let site = CallSite::from_parts(1, "main.rs", 3, "main");
        assert_eq!(site.file_name(), "main.rs");
    }

    #[test]
    fn thread_id_is_stable_within_a_thread() {
        assert_eq!(current_thread_id(), current_thread_id());
        let site = CallSite::new("a.rs", 1, "f");
        assert_eq!(site.thread(), current_thread_id());
    }

    #[test]
    fn thread_id_differs_across_threads() {
        let here = current_thread_id();
        let there = thread::spawn(current_thread_id)
            .join()
            .expect("thread completes");
        assert_ne!(here, there);
    }

    #[test]
    fn signature_drops_return_type_and_arguments() {
        assert_eq!(short_function_name("int main(int, char**)"), "main");
        assert_eq!(
            short_function_name("void logg::Demo::run(std::string_view) const"),
            "run"
        );
    }

    #[test]
    fn rust_paths_keep_last_segment() {
        assert_eq!(short_function_name("logg_demo::cli::emit_level"), "emit_level");
        assert_eq!(short_function_name("emit"), "emit");
    }

    #[test]
    fn nested_closures_resolve_to_enclosing_function() {
        assert_eq!(
            short_function_name("app::serve::{{closure}}::{{closure}}"),
            "serve"
        );
    }

    #[test]
    fn generic_arguments_do_not_split_segments() {
        assert_eq!(
            short_function_name("app::Pool<alloc::string::String>::get"),
            "get"
        );
        assert_eq!(short_function_name("app::make<core::fmt::Error>"), "make<core::fmt::Error>");
    }

    #[test]
    fn trait_impl_paths_are_best_effort() {
        assert_eq!(
            short_function_name("<app::Item as core::fmt::Display>::fmt"),
            "fmt"
        );
    }

    #[test]
    fn empty_input_yields_empty_name() {
        assert_eq!(short_function_name(""), "");
    }
}
