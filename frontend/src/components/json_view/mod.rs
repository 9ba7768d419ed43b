//! Collapsible JSON tree.
//!
//! Objects and arrays render as toggleable nodes; scalars carry a class per
//! JSON type (`string`, `number`, `bool`, `null`) for styling.

use serde_json::Value;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct JsonViewProps {
    pub value: Value,
    /// Start with every nested object and array closed.
    #[prop_or_default]
    pub collapsed: bool,
}

pub struct JsonView;

impl Component for JsonView {
    type Message = ();
    type Properties = JsonViewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        JsonView
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="jsonview">
                <JsonNode value={props.value.clone()} depth={0} collapsed={props.collapsed} />
            </div>
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct JsonNodeProps {
    pub value: Value,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    pub depth: usize,
    #[prop_or_default]
    pub collapsed: bool,
}

pub enum JsonNodeMsg {
    Toggle,
}

pub struct JsonNode {
    open: bool,
}

impl Component for JsonNode {
    type Message = JsonNodeMsg;
    type Properties = JsonNodeProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            open: !(props.collapsed && props.depth > 0),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            JsonNodeMsg::Toggle => {
                self.open = !self.open;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let label = match &props.label {
            Some(label) => html! { <><span class="prop">{ format!("\"{}\"", label) }</span>{": "}</> },
            None => html! {},
        };

        match &props.value {
            Value::Object(map) => {
                let children = map
                    .iter()
                    .map(|(key, value)| html! {
                        <li>
                            <JsonNode
                                value={value.clone()}
                                label={Some(AttrValue::from(key.clone()))}
                                depth={props.depth + 1}
                                collapsed={props.collapsed}
                            />
                        </li>
                    })
                    .collect::<Html>();
                self.container(ctx, label, ("{", "}"), map.len(), "keys", children)
            }
            Value::Array(items) => {
                let children = items
                    .iter()
                    .map(|value| html! {
                        <li>
                            <JsonNode value={value.clone()} depth={props.depth + 1} collapsed={props.collapsed} />
                        </li>
                    })
                    .collect::<Html>();
                self.container(ctx, label, ("[", "]"), items.len(), "items", children)
            }
            scalar => html! {
                <span class="json-leaf">{ label }{ scalar_html(scalar) }</span>
            },
        }
    }
}

impl JsonNode {
    fn container(
        &self,
        ctx: &Context<Self>,
        label: Html,
        (open_mark, close_mark): (&'static str, &'static str),
        len: usize,
        noun: &'static str,
        children: Html,
    ) -> Html {
        if len == 0 {
            return html! { <span class="json-leaf">{ label }{ open_mark }{ close_mark }</span> };
        }
        let toggle = ctx.link().callback(|_: MouseEvent| JsonNodeMsg::Toggle);
        html! {
            <span class={classes!("json-node", if self.open { "open" } else { "closed" })}>
                <a class="collapser" onclick={toggle}>{ if self.open { "-" } else { "+" } }</a>
                { label }
                { open_mark }
                {
                    if self.open {
                        html! { <ul class="obj">{ children }</ul> }
                    } else {
                        html! { <span class="ellipsis">{ format!(" {} {} ", len, noun) }</span> }
                    }
                }
                { close_mark }
            </span>
        }
    }
}

fn scalar_html(value: &Value) -> Html {
    let (class, text) = match value {
        Value::String(_) => ("string", value.to_string()),
        Value::Number(n) => ("number", n.to_string()),
        Value::Bool(b) => ("bool", b.to_string()),
        _ => ("null", "null".to_string()),
    };
    html! { <span class={class}>{ text }</span> }
}
