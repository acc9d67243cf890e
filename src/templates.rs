//! Rendered contents of the generated project files.
//!
//! Every function here is pure string formatting; all filesystem work lives
//! in the `project` module.

/// Build manifest (`CMakeLists.txt`) declaring an executable target.
///
/// `name` is embedded verbatim into the CMake syntax. Names containing
/// characters CMake treats specially will produce an invalid manifest;
/// no escaping is attempted.
pub fn cmake_lists_txt(name: &str) -> String {
    format!(
        r#"cmake_minimum_required(VERSION 3.0)

set(CMAKE_EXPORT_COMPILE_COMMANDS 1)
set(CMAKE_CXX_COMPILER g++-9)

project({name})

add_executable({name} src/main.cc)

target_include_directories({name} PRIVATE include)

target_compile_features({name} PRIVATE cxx_std_17)

target_compile_options({name} PRIVATE -fconcepts)
"#
    )
}

/// Configure script (`build.sh`).
///
/// With no arguments it generates into `build/`; with one argument it
/// generates into `build_$1/` and passes the argument through as the
/// CMake build type.
pub fn build_sh() -> &'static str {
    r#"if [[ $# -eq 0 ]]; then
    mkdir -p build
    cd build
    cmake -G Ninja ..
else
    mkdir -p build_$1
    cd build_$1
    cmake -G Ninja -D CMAKE_BUILD_TYPE=$1 ..
fi
"#
}

/// Build-and-run script (`run.sh`).
///
/// Selects the build directory with the same convention as `build.sh`,
/// builds with fixed parallelism, hoists the compilation database up to
/// the project root, then runs the freshly built binary.
pub fn run_sh(name: &str) -> String {
    format!(
        r#"if [[ $# -eq 0 ]]; then
    cd build
else
    cd build_$1
fi

cmake --build . -j 8
mv compile_commands.json ..
./{name}
"#
    )
}

/// Placeholder program (`src/main.cc`).
pub fn main_cc() -> &'static str {
    r#"#include <iostream>

auto main() -> int {
  std::cout << "hello world\n";
  return 0;
}
"#
}

/// Ignore file covering every generated build directory.
pub fn gitignore() -> &'static str {
    "build*/"
}
