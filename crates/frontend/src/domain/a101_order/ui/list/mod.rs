mod state;

use self::state::create_state;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, SearchInput, Select, StatusBadge};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a101_order::seed::orders;
use contracts::domain::a101_order::{filter_orders, Order, OrderPriority, OrderStatus};
use contracts::shared::display::CodedEnum;
use contracts::shared::filter::{SelectFilter, ALL_CODE};
use leptos::prelude::*;
use thaw::{
    Flex, FlexAlign, FlexGap, FlexJustify, Table, TableBody, TableCell, TableCellLayout,
    TableHeader, TableHeaderCell, TableRow,
};

fn priority_class(priority: OrderPriority) -> &'static str {
    match priority {
        OrderPriority::High => "table__row table__row--priority-high",
        OrderPriority::Normal => "table__row table__row--priority-normal",
        OrderPriority::Low => "table__row table__row--priority-low",
    }
}

fn status_options() -> Vec<(String, String)> {
    std::iter::once((ALL_CODE.to_string(), "All Status".to_string()))
        .chain(
            OrderStatus::all()
                .iter()
                .map(|s| (s.code().to_string(), s.label().to_string())),
        )
        .collect()
}

#[component]
fn OrderRow(order: Order) -> impl IntoView {
    let assignee = if order.is_assigned() {
        view! { <span>{order.assigned_to.clone()}</span> }.into_any()
    } else {
        view! { <span class="text-muted text-italic">"Unassigned"</span> }.into_any()
    };
    let Order {
        id,
        sku,
        product_name,
        quantity,
        store,
        status,
        order_date,
        priority,
        ..
    } = order;
    let order_date = order_date.format("%Y-%m-%d").to_string();

    view! {
        <TableRow class=priority_class(priority)>
            <TableCell>
                <TableCellLayout>
                    <div class="order-cell">
                        <span class="order-cell__id">{id}</span>
                        <span class="order-cell__sku">{sku}</span>
                    </div>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{product_name}</TableCellLayout>
            </TableCell>
            <TableCell class="text-right">
                <TableCellLayout>{quantity}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{store}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{assignee}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <StatusBadge meta=status.meta() />
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{order_date}</TableCellLayout>
            </TableCell>
            <TableCell>
                <Button variant="ghost" size="sm">{icon("more-vertical")}</Button>
            </TableCell>
        </TableRow>
    }
}

#[component]
pub fn OrdersList() -> impl IntoView {
    let state = create_state();
    let total = orders().len();

    let filtered = Memo::new(move |_| state.with(|s| filter_orders(orders(), &s.query())));

    let on_search = Callback::new(move |value: String| {
        log::debug!("orders: search '{value}'");
        state.update(|s| s.search_query = value);
    });

    let on_status = Callback::new(move |code: String| {
        let filter = SelectFilter::<OrderStatus>::parse(&code).unwrap_or_else(|e| {
            log::warn!("orders: {e}, showing all statuses");
            SelectFilter::All
        });
        log::debug!("orders: status filter '{}'", filter.code());
        state.update(|s| s.status_filter = filter);
    });

    view! {
        <PageFrame page_id="a101_order--list" category=PAGE_CAT_LIST>
            <PageHeader title="Orders" subtitle="Manage and track all purchase orders" />

            <div class="page__content">
                <Flex class="toolbar" justify=FlexJustify::SpaceBetween align=FlexAlign::Center gap=FlexGap::Medium>
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.search_query.clone()))
                        on_input=on_search
                        placeholder="Search by product, SKU, or order ID..."
                        class="toolbar__search"
                    />
                    <Select
                        value=Signal::derive(move || state.with(|s| s.status_filter.code()))
                        on_change=on_status
                        options=Signal::derive(status_options)
                    />
                    <Button variant="outline">{icon("filter")}" More Filters"</Button>
                    <Button variant="primary">{icon("upload")}" Import Orders"</Button>
                </Flex>

                <div class="table-wrapper">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Order"</TableHeaderCell>
                                <TableHeaderCell>"Product"</TableHeaderCell>
                                <TableHeaderCell>"Qty"</TableHeaderCell>
                                <TableHeaderCell>"Store"</TableHeaderCell>
                                <TableHeaderCell>"Assigned To"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Date"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || filtered.get()
                                key=|order| order.id.clone()
                                children=move |order: Order| view! { <OrderRow order=order /> }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || filtered.with(|rows| rows.is_empty())>
                        <div class="table-empty">"No orders match the current filters"</div>
                    </Show>
                </div>

                <Flex class="pagination" justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <span class="pagination__info">
                        {move || format!("Showing {} of {} orders", filtered.with(|rows| rows.len()), total)}
                    </span>
                    <Flex gap=FlexGap::Small>
                        <Button variant="outline" size="sm" disabled=true>"Previous"</Button>
                        <Button variant="outline" size="sm">"Next"</Button>
                    </Flex>
                </Flex>
            </div>
        </PageFrame>
    }
}
