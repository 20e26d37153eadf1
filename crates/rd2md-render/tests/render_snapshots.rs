use rd2md_render::render;
use rd_scan::{Argument, Documentation, Method, MethodLink};

#[test]
fn function_markdown() {
    let doc = Documentation {
        is_class: false,
        name: Some("create_experiment".to_string()),
        title: Some("Create Experiment".to_string()),
        description: Some("Create an experiment for logging runs.\n".to_string()),
        usage: Some("create_experiment(name = NULL, workspace = NULL)\n".to_string()),
        args: vec![
            Argument {
                name: "name".to_string(),
                description: "Experiment name".to_string(),
            },
            Argument {
                name: "workspace".to_string(),
                description: "The workspace; see [`Workspace`](./Workspace)".to_string(),
            },
        ],
        value: Some("An `Experiment` object\n".to_string()),
        examples: Some("exp <- create_experiment(\"my-run\")".to_string()),
        method_links: vec![],
        methods: vec![],
    };
    insta::assert_snapshot!(render(&doc));
}

#[test]
fn class_markdown() {
    let doc = Documentation {
        is_class: true,
        name: Some("Experiment".to_string()),
        title: Some("Experiment Class".to_string()),
        description: Some("An experiment tracks a single run.\n".to_string()),
        usage: None,
        args: vec![],
        value: None,
        examples: Some("exp <- Experiment$new()".to_string()),
        method_links: vec![
            MethodLink {
                target: "#method-Experiment-print".to_string(),
                text: "Experiment$print()".to_string(),
            },
            MethodLink {
                target: "#method-Experiment-clone".to_string(),
                text: "Experiment$clone()".to_string(),
            },
        ],
        methods: vec![
            Method {
                link_name: "method-Experiment-print".to_string(),
                method_name: "Method `print()`".to_string(),
                preamble: "Print a summary of the experiment.\n".to_string(),
                usage: "Experiment$print(...)".to_string(),
                arguments: "* `...` ignored\n".to_string(),
                examples: String::new(),
                returns: "The experiment, invisibly.\n".to_string(),
            },
            Method {
                link_name: "method-Experiment-clone".to_string(),
                method_name: "Method `clone()`".to_string(),
                preamble: String::new(),
                usage: "Experiment$clone(deep = FALSE)".to_string(),
                arguments: "* `deep` Whether to make a deep clone.\n".to_string(),
                examples: String::new(),
                returns: String::new(),
            },
        ],
    };
    insta::assert_snapshot!(render(&doc));
}
