//! Test fixtures - build scripts and config snippets.

/// Runs `sh build.sh <target>` instead of make; the target is `$1`.
pub const SH_BUILD_CONFIG: &str = r#"[build]
command = "sh"
args = ["build.sh"]
"#;

/// The `test` target copies every `src/*.output` to `build/test/a/`.
pub const TEST_BUILD_SCRIPT: &str = r#"set -e
case "$1" in
  test)
    mkdir -p build/test/a
    for f in src/*.output; do
      if [ -e "$f" ]; then cp "$f" build/test/a/; fi
    done
    ;;
  run)
    echo "running main"
    ;;
  clean)
    rm -rf build
    ;;
  "")
    mkdir -p build
    echo "built" > build/main
    ;;
esac
"#;

/// Every target fails with status 3.
pub const FAILING_BUILD_SCRIPT: &str = "echo 'compile error' >&2\nexit 3\n";

/// Produces `build/test/b/y.test.output` plus an unrelated object file.
pub const ARTIFACT_BUILD_SCRIPT: &str = r#"set -e
if [ "$1" = "test" ]; then
  mkdir -p build/test/b
  cp src/y.txt build/test/b/y.test.output
  echo "junk" > build/test/b/y.o
fi
"#;

/// Produces `build/test/y.test.output` directly under the test root.
pub const TOP_LEVEL_ARTIFACT_BUILD_SCRIPT: &str = r#"set -e
if [ "$1" = "test" ]; then
  mkdir -p build/test
  cp src/y.txt build/test/y.test.output
fi
"#;
