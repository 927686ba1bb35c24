//! Project tree and boilerplate emission
//!
//! Runs only after the final confirmation gate, so a canceled session
//! never touches the filesystem. Re-running into an existing directory
//! overwrites files silently.

use crate::config::{Framework, ProjectConfig};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Create the project directory tree and boilerplate files for the
/// confirmed configuration.
pub fn create_project_structure(base_dir: &Path, config: &ProjectConfig) -> Result<()> {
    ensure_dir(base_dir)?;

    write_file(&base_dir.join(".gitignore"), &gitignore(config.framework))?;
    write_file(&base_dir.join("README.md"), &readme(config))?;

    match config.framework {
        Framework::Nuxt => emit_nuxt(base_dir, config),
        Framework::Vue | Framework::Vuetify => emit_vite(base_dir, config),
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory {}", path.display()))
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

fn script_setup(use_ts: bool) -> &'static str {
    if use_ts {
        "<script setup lang=\"ts\">"
    } else {
        "<script setup>"
    }
}

// ---------------------------------------------------------------------------
// Shared files

fn gitignore(framework: Framework) -> String {
    let build_outputs = if framework == Framework::Nuxt {
        ".nuxt\n.output\n"
    } else {
        ""
    };
    format!(
        "# Logs
logs
*.log
npm-debug.log*
yarn-debug.log*
yarn-error.log*
pnpm-debug.log*
lerna-debug.log*

# Dependencies
node_modules
dist
dist-ssr
*.local

# Editor directories and files
.vscode/*
!.vscode/extensions.json
.idea
.DS_Store
*.suo
*.ntvs*
*.njsproj
*.sln
*.sw?

# Environment variables
.env
.env.local
.env.*.local

# Build outputs
{build_outputs}"
    )
}

fn readme(config: &ProjectConfig) -> String {
    let features = if config.features.is_empty() {
        "- None".to_string()
    } else {
        config
            .features
            .iter()
            .map(|f| format!("- {f}"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    format!(
        "# {}

{} project generated by VueArt CLI.

## Features

{}

## Getting Started

```bash
# Install dependencies
npm install

# Start development server
npm run dev

# Build for production
npm run build
```
",
        config.name,
        config.framework.display_name(),
        features
    )
}

// ---------------------------------------------------------------------------
// Vue / Vuetify (Vite-based)

fn vite_dirs(config: &ProjectConfig) -> &'static [&'static str] {
    match (config.framework, config.architecture.as_str()) {
        (Framework::Vue, "simple") => &["components", "views", "router", "store", "assets"],
        (Framework::Vue, "feature") => &[
            "features/example",
            "components",
            "views",
            "router",
            "store",
            "assets",
        ],
        (Framework::Vue, "atomic") => &[
            "components/atoms",
            "components/molecules",
            "components/organisms",
            "views",
            "assets",
        ],
        (Framework::Vue, "enterprise") => &[
            "modules",
            "features",
            "shared",
            "components/atoms",
            "components/molecules",
            "components/organisms",
            "assets",
        ],
        (Framework::Vuetify, "simple") => {
            &["components", "views", "router", "store", "plugins", "assets"]
        }
        (Framework::Vuetify, "feature") => &[
            "features/example",
            "components",
            "views",
            "router",
            "store",
            "plugins",
            "assets",
        ],
        (Framework::Vuetify, "enterprise") => &[
            "modules",
            "features",
            "shared",
            "components",
            "plugins",
            "assets",
        ],
        _ => &[],
    }
}

fn emit_vite(base_dir: &Path, config: &ProjectConfig) -> Result<()> {
    let src = base_dir.join("src");
    let use_ts = config.has_feature("ts");
    let has_vuetify = config.framework == Framework::Vuetify;
    let has_router = config.has_feature("router");
    let has_tailwind = config.has_feature("tailwind");
    let ext = if use_ts { "ts" } else { "js" };

    ensure_dir(&src)?;
    for dir in vite_dirs(config) {
        ensure_dir(&src.join(dir))?;
    }
    ensure_dir(&base_dir.join("public"))?;

    write_file(&base_dir.join("index.html"), &index_html(&config.name, ext))?;
    write_file(&base_dir.join("public/favicon.svg"), VUE_LOGO_SVG)?;

    let assets = src.join("assets");
    if assets.exists() {
        let logo = if has_vuetify { VUETIFY_LOGO_SVG } else { VUE_LOGO_SVG };
        write_file(&assets.join("logo.svg"), logo)?;
    }

    write_file(
        &base_dir.join(format!("vite.config.{ext}")),
        &vite_config(has_vuetify),
    )?;

    if use_ts {
        write_file(&base_dir.join("tsconfig.json"), TSCONFIG)?;
        write_file(&base_dir.join("tsconfig.node.json"), TSCONFIG_NODE)?;
    } else {
        write_file(&base_dir.join("jsconfig.json"), JSCONFIG)?;
    }

    // Router files only when the architecture carries a router directory
    let mut router_import = "";
    let mut router_use = "";
    let router_dir = src.join("router");
    if has_router && router_dir.exists() {
        write_file(&router_dir.join(format!("index.{ext}")), ROUTER_INDEX)?;
        let views = src.join("views");
        ensure_dir(&views)?;
        write_file(&views.join("Home.vue"), &home_view(has_vuetify, use_ts))?;
        router_import = "import { router } from './router';\n";
        router_use = ".use(router)";
    }

    let mut store_import = "";
    let mut store_use = "";
    let store_dir = src.join("store");
    if store_dir.exists() {
        if config.has_feature("pinia") {
            write_file(&store_dir.join(format!("index.{ext}")), PINIA_STORE)?;
            store_import = "import { store } from './store';\n";
            store_use = ".use(store)";
        } else if config.has_feature("vuex") {
            write_file(&store_dir.join(format!("index.{ext}")), VUEX_STORE)?;
            store_import = "import { store } from './store';\n";
            store_use = ".use(store)";
        }
    }

    let plugins_dir = src.join("plugins");
    let use_vuetify_plugin = has_vuetify && plugins_dir.exists();
    if use_vuetify_plugin {
        write_file(&plugins_dir.join(format!("vuetify.{ext}")), VUETIFY_PLUGIN)?;
    }

    let css_import = if has_vuetify {
        "import 'vuetify/styles';\n"
    } else if has_tailwind {
        write_file(&base_dir.join("tailwind.config.cjs"), TAILWIND_CONFIG)?;
        write_file(&base_dir.join("postcss.config.cjs"), POSTCSS_CONFIG)?;
        ensure_dir(&assets)?;
        write_file(&assets.join("main.css"), &format!("@tailwind base;\n@tailwind components;\n@tailwind utilities;\n\n{BASE_CSS}"))?;
        "import './assets/main.css';\n"
    } else {
        write_file(
            &src.join("style.css"),
            &format!(
                "* {{\n  margin: 0;\n  padding: 0;\n  box-sizing: border-box;\n}}\n\nbody {{\n  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;\n}}\n\n{BASE_CSS}"
            ),
        )?;
        "import './style.css';\n"
    };

    let vuetify_import = if use_vuetify_plugin {
        "import vuetify from './plugins/vuetify';\n"
    } else {
        ""
    };
    let vuetify_use = if use_vuetify_plugin { ".use(vuetify)" } else { "" };

    let main = format!(
        "import {{ createApp }} from 'vue';\nimport App from './App.vue';\n{css_import}{router_import}{store_import}{vuetify_import}\nconst app = createApp(App){router_use}{store_use}{vuetify_use};\n\napp.mount('#app');\n"
    );
    write_file(&src.join(format!("main.{ext}")), &main)?;

    write_file(&src.join("App.vue"), &app_vue(has_vuetify, use_ts))?;

    let components = src.join("components");
    if components.exists() {
        write_file(
            &components.join("HelloWorld.vue"),
            &hello_world(has_vuetify, use_ts),
        )?;
    }

    if config.architecture == "feature" {
        let example = src.join("features/example");
        if example.exists() {
            write_file(
                &example.join(format!("useExample.{ext}")),
                VITE_EXAMPLE_COMPOSABLE,
            )?;
            write_file(&example.join("ExampleView.vue"), &example_view(use_ts))?;
        }
    }

    let atoms = src.join("components/atoms");
    let molecules = src.join("components/molecules");
    let organisms = src.join("components/organisms");
    if atoms.exists() && molecules.exists() && organisms.exists() {
        write_file(&atoms.join("VaButton.vue"), &va_button(use_ts))?;
        write_file(&molecules.join("VaCard.vue"), &va_card(use_ts))?;
        write_file(&organisms.join("VaLayout.vue"), &va_layout(use_ts))?;
    }

    if config.architecture == "enterprise" {
        let shared = src.join("shared");
        if shared.exists() {
            ensure_dir(&shared.join("components"))?;
            ensure_dir(&shared.join("utils"))?;
        }
    }

    Ok(())
}

fn index_html(project_name: &str, ext: &str) -> String {
    format!(
        "<!doctype html>
<html lang=\"en\">
  <head>
    <meta charset=\"UTF-8\" />
    <link rel=\"icon\" type=\"image/svg+xml\" href=\"/favicon.svg\" />
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />
    <title>{project_name}</title>
  </head>
  <body>
    <div id=\"app\"></div>
    <script type=\"module\" src=\"/src/main.{ext}\"></script>
  </body>
</html>
"
    )
}

fn vite_config(has_vuetify: bool) -> String {
    let (vuetify_import, plugins) = if has_vuetify {
        ("import vuetify from 'vite-plugin-vuetify';\n", "vue(), vuetify()")
    } else {
        ("", "vue()")
    };
    format!(
        "import {{ defineConfig }} from 'vite';\nimport vue from '@vitejs/plugin-vue';\n{vuetify_import}\nexport default defineConfig({{\n  plugins: [{plugins}],\n}});"
    )
}

fn home_view(has_vuetify: bool, use_ts: bool) -> String {
    let script = script_setup(use_ts);
    if has_vuetify {
        format!(
            "<template>
  <v-container class=\"fill-height\">
    <v-row justify=\"center\" align=\"center\">
      <v-col cols=\"12\" class=\"text-center\">
        <h1 class=\"text-h3 mb-4\">Welcome to Vuetify App</h1>
        <p class=\"text-body-1\">This page is generated by VueArt CLI.</p>
      </v-col>
    </v-row>
  </v-container>
</template>

{script}
</script>
"
        )
    } else {
        format!(
            "<template>
  <main class=\"va-container\">
    <h1 class=\"va-title\">Welcome to Vue 3 App</h1>
    <p class=\"va-subtitle\">This page is generated by VueArt CLI.</p>
  </main>
</template>

{script}
</script>
"
        )
    }
}

fn app_vue(has_vuetify: bool, use_ts: bool) -> String {
    let script = script_setup(use_ts);
    if has_vuetify {
        format!(
            "<template>
  <v-app>
    <v-main>
      <HelloWorld />
    </v-main>
  </v-app>
</template>

{script}
import HelloWorld from './components/HelloWorld.vue';
</script>
"
        )
    } else {
        format!(
            "<template>
  <main class=\"va-container\">
    <h1 class=\"va-title\">Welcome to Vue 3 App</h1>
    <p class=\"va-subtitle\">This project is generated by VueArt CLI.</p>
  </main>
</template>

{script}
</script>
"
        )
    }
}

fn hello_world(has_vuetify: bool, use_ts: bool) -> String {
    let script = script_setup(use_ts);
    if has_vuetify {
        format!(
            "<template>
  <v-container>
    <h1>Welcome to Vuetify</h1>
  </v-container>
</template>

{script}
</script>
"
        )
    } else {
        let props = if use_ts {
            "defineProps<{ msg: string }>();"
        } else {
            "defineProps({ msg: String });"
        };
        format!(
            "<template>
  <div class=\"hello\">
    <h2>{{{{ msg }}}}</h2>
  </div>
</template>

{script}
{props}
</script>

<style scoped>
.hello {{
  text-align: center;
}}
</style>
"
        )
    }
}

fn example_view(use_ts: bool) -> String {
    let script = script_setup(use_ts);
    let import_suffix = if use_ts { "" } else { ".js" };
    format!(
        "<template>
  <section class=\"va-container\">
    <h2 class=\"va-title\">Feature: Example</h2>
    <button @click=\"increment\">Count: {{{{ count }}}}</button>
  </section>
</template>

{script}
import {{ useExample }} from './useExample{import_suffix}';

const {{ count, increment }} = useExample();
</script>
"
    )
}

fn va_button(use_ts: bool) -> String {
    format!(
        "<template>
  <button class=\"va-button\">
    <slot />
  </button>
</template>

{}
</script>
",
        script_setup(use_ts)
    )
}

fn va_card(use_ts: bool) -> String {
    format!(
        "<template>
  <section class=\"va-card\">
    <header class=\"va-card__header\">
      <slot name=\"title\" />
    </header>
    <div class=\"va-card__body\">
      <slot />
    </div>
  </section>
</template>

{}
</script>
",
        script_setup(use_ts)
    )
}

fn va_layout(use_ts: bool) -> String {
    format!(
        "<template>
  <div class=\"va-layout\">
    <header class=\"va-layout__header\">
      <slot name=\"header\" />
    </header>
    <main class=\"va-layout__content\">
      <slot />
    </main>
  </div>
</template>

{}
</script>
",
        script_setup(use_ts)
    )
}

const VUE_LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
  <circle cx="50" cy="50" r="40" fill="#42b883"/>
  <text x="50" y="60" font-size="40" text-anchor="middle" fill="white">V</text>
</svg>"##;

const VUETIFY_LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 200">
  <rect width="200" height="200" fill="#1867C0"/>
  <path d="M100 50 L150 150 L50 150 Z" fill="white"/>
  <circle cx="100" cy="120" r="20" fill="#1867C0"/>
</svg>"##;

const ROUTER_INDEX: &str = "import { createRouter, createWebHistory } from 'vue-router';
import Home from '../views/Home.vue';

const routes = [
  { path: '/', name: 'home', component: Home },
];

export const router = createRouter({
  history: createWebHistory(),
  routes,
});";

const PINIA_STORE: &str = "import { createPinia } from 'pinia';

export const store = createPinia();";

const VUEX_STORE: &str = "import { createStore } from 'vuex';

export const store = createStore({
  state: () => ({}),
  mutations: {},
  actions: {},
});";

const VUETIFY_PLUGIN: &str = "import { createVuetify } from 'vuetify';
import * as components from 'vuetify/components';
import * as directives from 'vuetify/directives';
import { aliases, mdi } from 'vuetify/iconsets/mdi';
import '@mdi/font/css/materialdesignicons.css';

export default createVuetify({
  components,
  directives,
  icons: {
    defaultSet: 'mdi',
    aliases,
    sets: {
      mdi,
    },
  },
});";

const VITE_EXAMPLE_COMPOSABLE: &str = "import { ref } from 'vue';

export function useExample() {
  const count = ref(0);
  const increment = () => count.value++;
  return { count, increment };
}";

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2020",
    "useDefineForClassFields": true,
    "module": "ESNext",
    "lib": ["ES2020", "DOM", "DOM.Iterable"],
    "skipLibCheck": true,
    "moduleResolution": "bundler",
    "allowImportingTsExtensions": true,
    "resolveJsonModule": true,
    "isolatedModules": true,
    "noEmit": true,
    "jsx": "preserve",
    "strict": true,
    "noUnusedLocals": true,
    "noUnusedParameters": true,
    "noFallthroughCasesInSwitch": true
  },
  "include": ["src/**/*.ts", "src/**/*.d.ts", "src/**/*.tsx", "src/**/*.vue"],
  "references": [{ "path": "./tsconfig.node.json" }]
}
"#;

const TSCONFIG_NODE: &str = r#"{
  "compilerOptions": {
    "composite": true,
    "skipLibCheck": true,
    "module": "ESNext",
    "moduleResolution": "bundler",
    "allowSyntheticDefaultImports": true
  },
  "include": ["vite.config.ts"]
}
"#;

const JSCONFIG: &str = r#"{
  "compilerOptions": {
    "baseUrl": ".",
    "paths": {
      "@/*": ["./src/*"]
    }
  },
  "include": ["src/**/*"]
}
"#;

const TAILWIND_CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  content: ['./index.html', './src/**/*.{vue,js,ts,jsx,tsx}'],
  theme: {
    extend: {},
  },
  plugins: [],
};"#;

const POSTCSS_CONFIG: &str = r#"module.exports = {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
};"#;

const BASE_CSS: &str = ".va-container {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 2rem;
}

.va-title {
  font-size: 2rem;
  font-weight: 700;
}

.va-subtitle {
  margin-top: 0.5rem;
  color: #64748b;
}";

// ---------------------------------------------------------------------------
// Nuxt

fn nuxt_dirs(architecture: &str) -> &'static [&'static str] {
    match architecture {
        "default" => &[
            "pages",
            "components",
            "composables",
            "plugins",
            "middleware",
            "server/api",
            "assets",
        ],
        "feature" => &[
            "pages",
            "features/example",
            "components",
            "composables",
            "plugins",
            "middleware",
            "server/api",
            "assets",
        ],
        "layered" => &[
            "pages",
            "layers/domain",
            "layers/application",
            "layers/presentation",
            "components",
            "composables",
            "plugins",
            "middleware",
            "server/api",
            "assets",
        ],
        "enterprise" => &[
            "pages",
            "features",
            "layers",
            "modules",
            "shared",
            "components",
            "composables",
            "plugins",
            "middleware",
            "server/api",
            "assets",
        ],
        _ => &[],
    }
}

fn emit_nuxt(base_dir: &Path, config: &ProjectConfig) -> Result<()> {
    let use_ts = config.has_feature("ts");
    let ext = if use_ts { "ts" } else { "js" };

    for dir in nuxt_dirs(&config.architecture) {
        ensure_dir(&base_dir.join(dir))?;
    }
    ensure_dir(&base_dir.join("layouts"))?;
    ensure_dir(&base_dir.join("public"))?;

    if config.architecture == "feature" {
        let example = base_dir.join("features/example");
        if example.exists() {
            write_file(
                &example.join(format!("useExample.{ext}")),
                NUXT_EXAMPLE_COMPOSABLE,
            )?;
            write_file(&example.join("ExamplePage.vue"), &nuxt_example_page(use_ts))?;
        }
    }

    if config.architecture == "layered" || config.architecture == "enterprise" {
        let layers = base_dir.join("layers");
        if layers.exists() {
            ensure_dir(&layers.join("domain/entities"))?;
            ensure_dir(&layers.join("domain/repositories"))?;
            ensure_dir(&layers.join("application/services"))?;
            ensure_dir(&layers.join("application/use-cases"))?;
            ensure_dir(&layers.join("presentation/components"))?;
            ensure_dir(&layers.join("presentation/composables"))?;
        }
    }

    if config.architecture == "enterprise" {
        let shared = base_dir.join("shared");
        if shared.exists() {
            ensure_dir(&shared.join("components"))?;
            ensure_dir(&shared.join("composables"))?;
            ensure_dir(&shared.join("utils"))?;
            if config.has_feature("pinia") {
                let store = shared.join("store");
                ensure_dir(&store)?;
                write_file(&store.join(format!("index.{ext}")), NUXT_PINIA_STORE)?;
            }
        }
    }

    write_file(&base_dir.join("nuxt.config.ts"), &nuxt_config(config))?;
    write_file(&base_dir.join("app.vue"), NUXT_APP_VUE)?;
    write_file(
        &base_dir.join("layouts/default.vue"),
        &nuxt_default_layout(use_ts),
    )?;
    write_file(&base_dir.join("pages/index.vue"), &nuxt_index_page(use_ts))?;
    write_file(&base_dir.join("public/favicon.ico"), "")?;

    if use_ts {
        write_file(
            &base_dir.join("tsconfig.json"),
            "{\n  \"extends\": \"./.nuxt/tsconfig.json\"\n}\n",
        )?;
    }

    if config.has_feature("tailwind") {
        let assets = base_dir.join("assets");
        if assets.exists() {
            let css_dir = assets.join("css");
            ensure_dir(&css_dir)?;
            write_file(
                &css_dir.join("main.css"),
                &format!("@tailwind base;\n@tailwind components;\n@tailwind utilities;\n\n{BASE_CSS}"),
            )?;
        }
    }

    Ok(())
}

fn nuxt_config(config: &ProjectConfig) -> String {
    let module_map: &[(&str, &str)] = &[
        ("tailwind", "'@nuxt/tailwindcss'"),
        ("pwa", "'@nuxt/pwa'"),
        ("axios", "'@nuxt/axios'"),
        ("i18n", "'@nuxt/i18n'"),
        ("auth", "'@nuxt/auth-next'"),
        ("pinia", "'@pinia/nuxt'"),
    ];
    let modules: Vec<&str> = module_map
        .iter()
        .filter(|(feature, _)| config.has_feature(feature))
        .map(|(_, module)| *module)
        .collect();
    format!(
        "// https://nuxt.com/docs/api/configuration/nuxt-config\nexport default defineNuxtConfig({{\n  modules: [{}],\n}})\n",
        modules.join(", ")
    )
}

fn nuxt_example_page(use_ts: bool) -> String {
    let script = script_setup(use_ts);
    let import_suffix = if use_ts { "" } else { ".js" };
    format!(
        "<template>
  <main class=\"va-container\">
    <h2 class=\"va-title\">Feature: Example</h2>
    <button @click=\"increment\">Count: {{{{ count }}}}</button>
  </main>
</template>

{script}
import {{ useExample }} from './useExample{import_suffix}';

const {{ count, increment }} = useExample();
</script>
"
    )
}

fn nuxt_default_layout(use_ts: bool) -> String {
    format!(
        "<template>
  <div>
    <header>
      <nav>
        <NuxtLink to=\"/\">Home</NuxtLink>
      </nav>
    </header>
    <main>
      <slot />
    </main>
  </div>
</template>

{}
</script>
",
        script_setup(use_ts)
    )
}

fn nuxt_index_page(use_ts: bool) -> String {
    format!(
        "<template>
  <main class=\"va-container\">
    <h1 class=\"va-title\">Welcome to Nuxt App</h1>
    <p class=\"va-subtitle\">This page is generated by VueArt CLI.</p>
  </main>
</template>

{}
</script>
",
        script_setup(use_ts)
    )
}

const NUXT_APP_VUE: &str = "<template>
  <NuxtLayout>
    <NuxtPage />
  </NuxtLayout>
</template>
";

const NUXT_EXAMPLE_COMPOSABLE: &str = "export const useExample = () => {
  const count = useState('example', () => 0);
  const increment = () => count.value++;
  return { count, increment };
};";

const NUXT_PINIA_STORE: &str = "import { defineStore } from 'pinia';

export const useAppStore = defineStore('app', {
  state: () => ({
  }),
  getters: {
  },
  actions: {
  },
});";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Lifetime, PackageManager, Scale};
    use std::collections::BTreeSet;
    use tempfile::TempDir;
    use walkdir::WalkDir;

    fn config(framework: Framework, architecture: &str, features: &[&str]) -> ProjectConfig {
        ProjectConfig {
            name: "demo".to_string(),
            framework,
            features: features.iter().map(|s| s.to_string()).collect(),
            architecture: architecture.to_string(),
            scale: Scale::Small,
            lifetime: Lifetime::Short,
            package_manager: PackageManager::Npm,
            install_deps: false,
        }
    }

    fn emitted_paths(base: &Path) -> BTreeSet<String> {
        WalkDir::new(base)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.depth() > 0)
            .map(|e| {
                e.path()
                    .strip_prefix(base)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    fn read(base: &Path, rel: &str) -> String {
        fs::read_to_string(base.join(rel)).unwrap()
    }

    #[test]
    fn vue_simple_js_tree() {
        let tmp = TempDir::new().unwrap();
        create_project_structure(tmp.path(), &config(Framework::Vue, "simple", &[])).unwrap();
        let paths = emitted_paths(tmp.path());

        for expected in [
            ".gitignore",
            "README.md",
            "index.html",
            "public/favicon.svg",
            "vite.config.js",
            "jsconfig.json",
            "src/components",
            "src/views",
            "src/router",
            "src/store",
            "src/assets/logo.svg",
            "src/style.css",
            "src/main.js",
            "src/App.vue",
            "src/components/HelloWorld.vue",
        ] {
            assert!(paths.contains(expected), "missing {expected}");
        }
        assert!(!paths.contains("tsconfig.json"));
        // No router/store features selected: directories exist but stay empty
        assert!(!paths.contains("src/router/index.js"));
        assert!(!paths.contains("src/store/index.js"));

        let main = read(tmp.path(), "src/main.js");
        assert!(main.contains("createApp(App);"));
        assert!(main.contains("import './style.css';"));
        assert!(!read(tmp.path(), ".gitignore").contains(".nuxt"));
    }

    #[test]
    fn vue_feature_ts_with_router_and_pinia() {
        let tmp = TempDir::new().unwrap();
        create_project_structure(
            tmp.path(),
            &config(Framework::Vue, "feature", &["ts", "router", "pinia"]),
        )
        .unwrap();
        let paths = emitted_paths(tmp.path());

        for expected in [
            "vite.config.ts",
            "tsconfig.json",
            "tsconfig.node.json",
            "src/router/index.ts",
            "src/views/Home.vue",
            "src/store/index.ts",
            "src/features/example/useExample.ts",
            "src/features/example/ExampleView.vue",
        ] {
            assert!(paths.contains(expected), "missing {expected}");
        }

        assert!(read(tmp.path(), "src/store/index.ts").contains("createPinia"));
        let main = read(tmp.path(), "src/main.ts");
        assert!(main.contains(".use(router)"));
        assert!(main.contains(".use(store)"));
        assert!(read(tmp.path(), "src/views/Home.vue").contains("lang=\"ts\""));
    }

    #[test]
    fn vue_atomic_tree_has_component_trio() {
        let tmp = TempDir::new().unwrap();
        create_project_structure(tmp.path(), &config(Framework::Vue, "atomic", &["ts"])).unwrap();
        let paths = emitted_paths(tmp.path());

        for expected in [
            "src/components/atoms/VaButton.vue",
            "src/components/molecules/VaCard.vue",
            "src/components/organisms/VaLayout.vue",
            "src/views",
        ] {
            assert!(paths.contains(expected), "missing {expected}");
        }
        // Atomic has no router/store directories
        assert!(!paths.contains("src/router"));
        assert!(!paths.contains("src/store"));
    }

    #[test]
    fn vue_enterprise_creates_shared_subdirs() {
        let tmp = TempDir::new().unwrap();
        create_project_structure(tmp.path(), &config(Framework::Vue, "enterprise", &[])).unwrap();
        let paths = emitted_paths(tmp.path());
        assert!(paths.contains("src/shared/components"));
        assert!(paths.contains("src/shared/utils"));
        assert!(paths.contains("src/modules"));
    }

    #[test]
    fn vuex_store_module_is_emitted() {
        let tmp = TempDir::new().unwrap();
        create_project_structure(tmp.path(), &config(Framework::Vue, "simple", &["vuex"])).unwrap();
        assert!(read(tmp.path(), "src/store/index.js").contains("createStore"));
        assert!(read(tmp.path(), "src/main.js").contains(".use(store)"));
    }

    #[test]
    fn vuetify_simple_wires_the_plugin() {
        let tmp = TempDir::new().unwrap();
        create_project_structure(tmp.path(), &config(Framework::Vuetify, "simple", &[])).unwrap();
        let paths = emitted_paths(tmp.path());
        assert!(paths.contains("src/plugins/vuetify.js"));

        assert!(read(tmp.path(), "vite.config.js").contains("vite-plugin-vuetify"));
        let main = read(tmp.path(), "src/main.js");
        assert!(main.contains("import 'vuetify/styles';"));
        assert!(main.contains(".use(vuetify)"));
        assert!(read(tmp.path(), "src/App.vue").contains("<v-app>"));
    }

    #[test]
    fn tailwind_emits_configs_and_css() {
        let tmp = TempDir::new().unwrap();
        create_project_structure(tmp.path(), &config(Framework::Vue, "simple", &["tailwind"]))
            .unwrap();
        let paths = emitted_paths(tmp.path());
        assert!(paths.contains("tailwind.config.cjs"));
        assert!(paths.contains("postcss.config.cjs"));
        assert!(read(tmp.path(), "src/assets/main.css").starts_with("@tailwind base;"));
        assert!(read(tmp.path(), "src/main.js").contains("import './assets/main.css';"));
    }

    #[test]
    fn nuxt_default_tree() {
        let tmp = TempDir::new().unwrap();
        create_project_structure(
            tmp.path(),
            &config(Framework::Nuxt, "default", &["ts", "tailwind", "pinia"]),
        )
        .unwrap();
        let paths = emitted_paths(tmp.path());

        for expected in [
            "nuxt.config.ts",
            "app.vue",
            "layouts/default.vue",
            "pages/index.vue",
            "public/favicon.ico",
            "tsconfig.json",
            "server/api",
            "middleware",
            "assets/css/main.css",
        ] {
            assert!(paths.contains(expected), "missing {expected}");
        }

        let nuxt_config = read(tmp.path(), "nuxt.config.ts");
        assert!(nuxt_config.contains("'@nuxt/tailwindcss'"));
        assert!(nuxt_config.contains("'@pinia/nuxt'"));
        assert!(read(tmp.path(), ".gitignore").contains(".nuxt"));
        assert!(read(tmp.path(), "tsconfig.json").contains("./.nuxt/tsconfig.json"));
    }

    #[test]
    fn nuxt_layered_creates_layer_subdirs() {
        let tmp = TempDir::new().unwrap();
        create_project_structure(tmp.path(), &config(Framework::Nuxt, "layered", &[])).unwrap();
        let paths = emitted_paths(tmp.path());
        for expected in [
            "layers/domain/entities",
            "layers/domain/repositories",
            "layers/application/services",
            "layers/application/use-cases",
            "layers/presentation/components",
            "layers/presentation/composables",
        ] {
            assert!(paths.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn nuxt_enterprise_with_pinia_emits_shared_store() {
        let tmp = TempDir::new().unwrap();
        create_project_structure(
            tmp.path(),
            &config(Framework::Nuxt, "enterprise", &["pinia"]),
        )
        .unwrap();
        let paths = emitted_paths(tmp.path());
        assert!(paths.contains("shared/store/index.js"));
        assert!(read(tmp.path(), "shared/store/index.js").contains("defineStore"));
        assert!(paths.contains("shared/composables"));
    }

    #[test]
    fn nuxt_feature_example_files() {
        let tmp = TempDir::new().unwrap();
        create_project_structure(tmp.path(), &config(Framework::Nuxt, "feature", &[])).unwrap();
        let paths = emitted_paths(tmp.path());
        assert!(paths.contains("features/example/useExample.js"));
        assert!(paths.contains("features/example/ExamplePage.vue"));
        assert!(read(tmp.path(), "features/example/ExamplePage.vue").contains("./useExample.js"));
    }

    #[test]
    fn nuxt_config_without_features_has_empty_modules() {
        let tmp = TempDir::new().unwrap();
        create_project_structure(tmp.path(), &config(Framework::Nuxt, "default", &[])).unwrap();
        assert!(read(tmp.path(), "nuxt.config.ts").contains("modules: []"));
    }
}
