//! Generic record table driven by column descriptors.

use std::rc::Rc;

use yew::prelude::*;
use yew::virtual_dom::Key;

pub type ValueFn<T> = Rc<dyn Fn(&T) -> String>;
pub type RenderFn<T> = Rc<dyn Fn(&T) -> Html>;

/// Records shown by a [`DataDisplay`]. The key identifies a record across
/// renders and must be unique within one result set.
pub trait Keyed {
    fn row_key(&self) -> Key;
}

/// One column of a [`DataDisplay`].
pub enum Column<T> {
    /// Shows a value read from each record as plain text.
    Field { header: AttrValue, value: ValueFn<T> },
    /// Shows whatever `render` produces for each record.
    Render { header: AttrValue, render: RenderFn<T> },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColumnError {
    #[error("column `{0}` needs either a field accessor or a render function")]
    MissingProjection(AttrValue),
    #[error("column `{0}` has both a field accessor and a render function")]
    ConflictingProjection(AttrValue),
}

impl<T> Column<T> {
    pub fn field<F>(header: impl Into<AttrValue>, value: F) -> Self
    where
        F: Fn(&T) -> String + 'static,
    {
        Self::Field {
            header: header.into(),
            value: Rc::new(value),
        }
    }

    pub fn render<F>(header: impl Into<AttrValue>, render: F) -> Self
    where
        F: Fn(&T) -> Html + 'static,
    {
        Self::Render {
            header: header.into(),
            render: Rc::new(render),
        }
    }

    /// Builds a column from loosely specified parts, such as a column list
    /// assembled at runtime. Exactly one projection must be given.
    pub fn from_parts(
        header: impl Into<AttrValue>,
        value: Option<ValueFn<T>>,
        render: Option<RenderFn<T>>,
    ) -> Result<Self, ColumnError> {
        let header = header.into();
        match (value, render) {
            (Some(value), None) => Ok(Self::Field { header, value }),
            (None, Some(render)) => Ok(Self::Render { header, render }),
            (None, None) => Err(ColumnError::MissingProjection(header)),
            (Some(_), Some(_)) => Err(ColumnError::ConflictingProjection(header)),
        }
    }

    pub fn header(&self) -> &AttrValue {
        match self {
            Self::Field { header, .. } | Self::Render { header, .. } => header,
        }
    }

    fn cell(&self, item: &T) -> Html {
        match self {
            Self::Field { value, .. } => html! { {value(item)} },
            Self::Render { render, .. } => render(item),
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Field { header, value } => Self::Field {
                header: header.clone(),
                value: value.clone(),
            },
            Self::Render { header, render } => Self::Render {
                header: header.clone(),
                render: render.clone(),
            },
        }
    }
}

impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Field { header, value },
                Self::Field {
                    header: other_header,
                    value: other_value,
                },
            ) => header == other_header && Rc::ptr_eq(value, other_value),
            (
                Self::Render { header, render },
                Self::Render {
                    header: other_header,
                    render: other_render,
                },
            ) => header == other_header && Rc::ptr_eq(render, other_render),
            _ => false,
        }
    }
}

/// Text for an optional value; absent values show nothing.
pub fn optional_text<V: ToString>(value: Option<V>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}

/// Which layout(s) a [`DataDisplay`] renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// A table on wide viewports and stacked cards on narrow ones.
    #[default]
    Responsive,
    Table,
    Cards,
}

#[derive(Properties, PartialEq)]
pub struct DataDisplayProps<T: PartialEq + 'static> {
    pub data: Vec<T>,
    pub columns: Rc<Vec<Column<T>>>,
    pub empty_message: AttrValue,
    #[prop_or_default]
    pub mode: DisplayMode,
}

#[function_component]
pub fn DataDisplay<T>(props: &DataDisplayProps<T>) -> Html
where
    T: Keyed + PartialEq + 'static,
{
    if props.data.is_empty() {
        return html! {
            <div class="text-center py-8 text-gray-400" data-empty="true">
                {props.empty_message.clone()}
            </div>
        };
    }

    let rows: Vec<(&T, Key)> = props
        .data
        .iter()
        .map(|item| (item, item.row_key()))
        .collect();

    let (show_table, show_cards) = match props.mode {
        DisplayMode::Responsive => (
            Some(classes!("hidden", "md:block")),
            Some(classes!("md:hidden")),
        ),
        DisplayMode::Table => (Some(classes!()), None),
        DisplayMode::Cards => (None, Some(classes!())),
    };

    let table = show_table.map(|visibility| {
        html! {
            <div class={classes!("overflow-x-auto", "rounded-lg", "border", "border-gray-800", visibility)}>
                <table class="w-full">
                    <thead class="bg-gray-800 border-b border-gray-700">
                        <tr>
                            { for props.columns.iter().map(|column| html! {
                                <th class="text-left px-6 py-4 text-sm font-semibold text-gray-300 uppercase tracking-wider">
                                    {column.header().clone()}
                                </th>
                            }) }
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-800">
                        { for rows.iter().map(|(item, key)| html! {
                            <tr key={key.clone()} data-row-key={key.to_string()} class="hover:bg-gray-800/50 transition-colors">
                                { for props.columns.iter().map(|column| html! {
                                    <td class="px-6 py-4 text-sm text-gray-300">
                                        {column.cell(item)}
                                    </td>
                                }) }
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        }
    });

    let cards = show_cards.map(|visibility| {
        html! {
            <div class={classes!("space-y-3", visibility)}>
                { for rows.iter().map(|(item, key)| html! {
                    <div key={key.clone()} data-card-key={key.to_string()} class="rounded-lg border border-gray-800 bg-gray-900 p-4 space-y-2">
                        { for props.columns.iter().map(|column| html! {
                            <div class="flex justify-between gap-4 text-sm">
                                <span class="font-semibold text-gray-400">{column.header().clone()}</span>
                                <span class="text-right text-gray-300">{column.cell(item)}</span>
                            </div>
                        }) }
                    </div>
                }) }
            </div>
        }
    });

    html! {
        <>
            {table}
            {cards}
        </>
    }
}
