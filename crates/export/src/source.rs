// Copyright 2025 Crrow
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use themesmith_theme::ThemeConfig;

use crate::{dialect::Dialect, err::Result, json::to_json};

const FRAMEWORK_MODULE: &str = "@mui/material/styles";

/// Renders a theme module: the configuration as a `themeConfig` export, a
/// `theme` export built with `createTheme`, and `theme` as default export.
///
/// Both dialects embed the same JSON; the typed one adds a `ThemeOptions`
/// import and annotation.
pub fn to_source_code(config: &ThemeConfig, dialect: Dialect) -> Result<String> {
    let json = to_json(config)?;

    let mut out = String::with_capacity(json.len() + 256);
    if dialect.is_typed() {
        out.push_str(&format!(
            "import type {{ ThemeOptions }} from '{FRAMEWORK_MODULE}';\n\n"
        ));
    }
    out.push_str(&format!(
        "import {{ createTheme }} from '{FRAMEWORK_MODULE}';\n\n"
    ));

    let annotation = if dialect.is_typed() { ": ThemeOptions" } else { "" };
    out.push_str(&format!("export const themeConfig{annotation} = {json};\n\n"));
    out.push_str("export const theme = createTheme(themeConfig);\n\n");
    out.push_str("export default theme;\n");
    Ok(out)
}

/// A fixed example of mounting the exported theme in an application.
pub fn usage_snippet(dialect: Dialect) -> String {
    let typed = dialect.is_typed();
    let react_import = if typed {
        "import type { FC } from 'react';"
    } else {
        ""
    };
    let (open, close) = if typed {
        ("const App: FC = () => {", "};")
    } else {
        ("function App() {", "}")
    };

    let mut lines = vec![
        "// Import the theme".to_owned(),
        format!("import {{ theme }} from './theme.{}';", dialect.extension()),
        format!("import {{ ThemeProvider }} from '{FRAMEWORK_MODULE}';"),
        "import CssBaseline from '@mui/material/CssBaseline';".to_owned(),
        react_import.to_owned(),
        String::new(),
        "// Wrap your app with ThemeProvider".to_owned(),
        open.to_owned(),
    ];
    lines.extend(
        [
            "  return (",
            "    <ThemeProvider theme={theme}>",
            "      <CssBaseline />",
            "      {/* Your app components */}",
            "    </ThemeProvider>",
            "  );",
            close,
            "",
            "export default App;",
            "",
        ]
        .map(str::to_owned),
    );
    lines.join("\n")
}
