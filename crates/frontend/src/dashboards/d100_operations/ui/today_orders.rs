use crate::shared::components::ui::StatusBadge;
use contracts::dashboards::d100_operations::{today_orders, TodayOrder};
use contracts::shared::display::CodedEnum;
use leptos::prelude::*;
use thaw::{
    Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow,
};

fn order_row(order: &'static TodayOrder) -> impl IntoView {
    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout>
                    <span class="order-cell__id">{order.id.clone()}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>
                    <div class="order-cell">
                        <span>{order.product_name.clone()}</span>
                        <span class="order-cell__sku">{order.sku.clone()}</span>
                    </div>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{order.quantity}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{order.store.clone()}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{order.assigned_to.clone()}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <StatusBadge meta=order.status.meta() />
                </TableCellLayout>
            </TableCell>
        </TableRow>
    }
}

#[component]
pub fn TodayOrders() -> impl IntoView {
    let orders = today_orders();

    view! {
        <div class="card widget">
            <div class="widget__header">
                <h3 class="widget__title">"Today's Orders"</h3>
                <p class="widget__subtitle">{format!("{} orders to process", orders.len())}</p>
            </div>
            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Order ID"</TableHeaderCell>
                            <TableHeaderCell>"Product"</TableHeaderCell>
                            <TableHeaderCell>"Qty"</TableHeaderCell>
                            <TableHeaderCell>"Store"</TableHeaderCell>
                            <TableHeaderCell>"Staff"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {orders.iter().map(order_row).collect_view()}
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}
